//! Action 系统
//!
//! 按键先被映射为 Action，再由 App 统一处理，按键映射与状态变更互不依赖

/// TUI 动作枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    // ========== 焦点 ==========
    /// 下一个控件（Tab）
    FocusNext,
    /// 上一个控件（Shift-Tab）
    FocusPrev,

    // ========== 表单输入 ==========
    /// 向当前输入框输入字符
    InputChar(char),
    /// 删除字符（Backspace）
    DeleteChar,
    /// 切换自定义短码（Space）
    ToggleCustomCode,
    /// 提交表单
    Submit,

    // ========== 结果 ==========
    /// 复制短链接
    Copy,
    ScrollUp,
    ScrollDown,

    // ========== 屏幕 ==========
    ShowHelp,
    CloseHelp,
    /// 进入退出确认
    RequestExit,
    ConfirmExit,
    CancelExit,
    /// 立即退出（Ctrl-C）
    Quit,

    /// 无操作
    #[default]
    Noop,
}
