//! 结果展示
//!
//! 保存生成的短链接、访问路径以及结果区块的可见性

use crate::service::visit_path;

#[derive(Debug, Default)]
pub struct ResultPresenter {
    short_url: String,
    visit_path: String,
    visible: bool,
    /// 结果输入框的文本是否处于全选状态
    selected: bool,
    scroll_requested: bool,
}

impl ResultPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    pub fn visit_path(&self) -> &str {
        &self.visit_path
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_selected(&self) -> bool {
        self.visible && self.selected
    }

    /// 显示结果并请求滚动到可见位置
    pub fn present(&mut self, short_url: &str, short_code: &str) {
        self.short_url = short_url.to_string();
        self.visit_path = visit_path(short_code);
        self.visible = true;
        self.selected = false;
        self.scroll_requested = true;
    }

    /// URL 输入框内容变化
    ///
    /// 只有非空白内容才会隐藏结果；清空输入框不做任何处理
    pub fn on_url_input(&mut self, value: &str) {
        if !value.trim().is_empty() {
            self.visible = false;
            self.selected = false;
        }
    }

    pub fn select_all(&mut self) {
        self.selected = true;
    }

    /// 取出待处理的滚动请求（只会返回一次 true）
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}
