//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 按钮与提示文本
pub mod text {
    /// 提交按钮默认文本
    pub const SUBMIT_LABEL: &str = "Shorten URL";
    /// 提交中
    pub const SUBMIT_BUSY_LABEL: &str = "⏳ Processing...";
    /// 复制按钮默认文本
    pub const COPY_LABEL: &str = "📋 Copy";
    /// 复制成功后的确认文本
    pub const COPY_ACK_LABEL: &str = "✓ Copied!";

    pub const SHORTEN_SUCCESS: &str = "✅ URL shortened successfully!";
    pub const NETWORK_ERROR: &str = "❌ Network error. Please try again.";
    pub const COPY_SUCCESS: &str = "📋 Copied to clipboard!";
    /// 服务端错误前缀
    pub const ERROR_PREFIX: &str = "❌ ";
}

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 80);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 各区块高度
pub mod layout {
    /// 单行输入框（含边框）
    pub const INPUT_HEIGHT: u16 = 3;
    /// 复选框行
    pub const TOGGLE_HEIGHT: u16 = 1;
    /// 按钮（含边框）
    pub const BUTTON_HEIGHT: u16 = 3;
    /// 访问链接行
    pub const LINK_HEIGHT: u16 = 1;
    /// 区块外框
    pub const SECTION_BORDER: u16 = 2;
    /// 区块之间的空行
    pub const SECTION_GAP: u16 = 1;
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
    /// 选中文本背景
    pub const SELECTION_BG: Color = Color::Blue;

    /// 复制确认时按钮背景 (#059669)
    pub const COPY_ACK_BG: Color = Color::Rgb(0x05, 0x96, 0x69);

    /// 成功提示：文字 #059669，边框 #10b981，背景 #10b981 以 0x20 透明度叠加在黑色上
    pub const SUCCESS_FG: Color = Color::Rgb(0x05, 0x96, 0x69);
    pub const SUCCESS_BORDER: Color = Color::Rgb(0x10, 0xb9, 0x81);
    pub const SUCCESS_BG: Color = Color::Rgb(0x02, 0x17, 0x10);

    /// 错误提示：文字 #dc2626，边框 #ef4444，背景 #ef4444 以 0x20 透明度叠加在黑色上
    pub const ERROR_FG: Color = Color::Rgb(0xdc, 0x26, 0x26);
    pub const ERROR_BORDER: Color = Color::Rgb(0xef, 0x44, 0x44);
    pub const ERROR_BG: Color = Color::Rgb(0x1e, 0x09, 0x09);
}
