//! 表单控制器
//!
//! 管理 URL 输入、自定义短码开关以及提交按钮状态

use crate::interfaces::tui::constants::text;
use crate::service::ShortenRequest;

/// 当前获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    OriginalUrl,
    CustomCodeToggle,
    CustomCode,
    Submit,
    Copy,
}

impl Focus {
    /// 是否为文本输入框
    pub fn is_text_input(self) -> bool {
        matches!(self, Self::OriginalUrl | Self::CustomCode)
    }
}

/// 提交按钮
///
/// 禁用状态即"存在进行中的请求"，同一时刻最多一个
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    saved_label: Option<String>,
    disabled: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            label: text::SUBMIT_LABEL.to_string(),
            saved_label: None,
            disabled: false,
        }
    }
}

impl SubmitControl {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// 进入提交中状态；已禁用时返回 false
    fn begin(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        let original = std::mem::replace(&mut self.label, text::SUBMIT_BUSY_LABEL.to_string());
        self.saved_label = Some(original);
        self.disabled = true;
        true
    }

    /// 恢复原始文本并重新启用
    fn restore(&mut self) {
        if let Some(label) = self.saved_label.take() {
            self.label = label;
        }
        self.disabled = false;
    }
}

#[derive(Debug, Default)]
pub struct FormController {
    pub original_url: String,
    pub custom_code: String,
    custom_code_enabled: bool,
    submit: SubmitControl,
    focus: Focus,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn custom_code_enabled(&self) -> bool {
        self.custom_code_enabled
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_disabled()
    }

    /// 切换自定义短码
    ///
    /// 打开时显示输入框并聚焦；关闭时隐藏并清空已输入的短码
    pub fn toggle_custom_code(&mut self) {
        self.custom_code_enabled = !self.custom_code_enabled;
        if self.custom_code_enabled {
            self.focus = Focus::CustomCode;
        } else {
            self.custom_code.clear();
            if self.focus == Focus::CustomCode {
                self.focus = Focus::CustomCodeToggle;
            }
        }
    }

    /// 开始一次提交，返回要发送的请求
    ///
    /// 已有请求在进行中时返回 `None`
    pub fn begin_submit(&mut self) -> Option<ShortenRequest> {
        if !self.submit.begin() {
            return None;
        }
        Some(ShortenRequest::new(&self.original_url, &self.custom_code))
    }

    /// 请求结束（无论结果）
    pub fn finish_submit(&mut self) {
        self.submit.restore();
    }

    /// 清空所有输入并收起自定义短码
    pub fn reset(&mut self) {
        self.original_url.clear();
        self.custom_code.clear();
        self.custom_code_enabled = false;
        self.focus = Focus::OriginalUrl;
    }

    /// 可聚焦控件的顺序
    fn focus_order(&self, result_visible: bool) -> Vec<Focus> {
        let mut order = vec![Focus::OriginalUrl, Focus::CustomCodeToggle];
        if self.custom_code_enabled {
            order.push(Focus::CustomCode);
        }
        order.push(Focus::Submit);
        if result_visible {
            order.push(Focus::Copy);
        }
        order
    }

    pub fn focus_next(&mut self, result_visible: bool) {
        let order = self.focus_order(result_visible);
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self, result_visible: bool) {
        let order = self.focus_order(result_visible);
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = if idx == 0 {
            order[order.len() - 1]
        } else {
            order[idx - 1]
        };
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// 焦点所在控件消失后回到 URL 输入框
    pub fn normalize_focus(&mut self, result_visible: bool) {
        if !self.focus_order(result_visible).contains(&self.focus) {
            self.focus = Focus::OriginalUrl;
        }
    }

    fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::OriginalUrl => Some(&mut self.original_url),
            Focus::CustomCode => Some(&mut self.custom_code),
            _ => None,
        }
    }

    /// 向当前输入框添加字符，返回 URL 输入框是否被修改
    pub fn input_char(&mut self, c: char) -> bool {
        let editing_url = self.focus == Focus::OriginalUrl;
        match self.current_input_mut() {
            Some(input) => {
                input.push(c);
                editing_url
            }
            None => false,
        }
    }

    /// 删除当前输入框最后一个字符，返回 URL 输入框是否被修改
    pub fn backspace(&mut self) -> bool {
        let editing_url = self.focus == Focus::OriginalUrl;
        match self.current_input_mut() {
            Some(input) => input.pop().is_some() && editing_url,
            None => false,
        }
    }
}
