//! 通用输入框组件
//!
//! 单行文本输入，支持：
//! - 焦点高亮
//! - 占位提示
//! - 只读与全选显示
//! - 超出宽度时显示末尾部分

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// 使用 Builder 模式配置各种选项
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("Long URL", &form.original_url)
///     .active(true)
///     .placeholder("https://example.com/a/very/long/path")
///     .render(area, buf);
/// ```
pub struct InputField<'a> {
    /// 字段标题
    title: &'a str,
    /// 输入值
    value: &'a str,
    /// 是否处于激活状态
    is_active: bool,
    /// 占位符文本
    placeholder: Option<&'a str>,
    /// 是否必填
    required: bool,
    /// 是否只读
    readonly: bool,
    /// 文本是否全选
    selected: bool,
}

impl<'a> InputField<'a> {
    /// 创建新的输入框
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            required: false,
            readonly: false,
            selected: false,
        }
    }

    /// 设置激活状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置占位符
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 设置为必填字段
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 设置为只读
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// 设置全选显示
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// 获取显示的标题
    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if self.required {
            title.push_str(" *");
        }

        if self.readonly {
            title.push_str(" [readonly]");
        }

        title
    }

    /// 获取边框样式
    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else if self.readonly {
            Style::default().fg(colors::MUTED)
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 光标位置（输入框激活且可编辑时）
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.is_active || self.readonly || area.width < 3 || area.height < 3 {
            return None;
        }
        let inner_width = area.width - 2;
        let shown = visible_tail(self.value, inner_width.saturating_sub(1));
        let x = area.x + 1 + Line::from(shown).width() as u16;
        Some(Position::new(x, area.y + 1))
    }

    fn display_line(&self, inner_width: u16) -> Line<'a> {
        if self.value.is_empty() {
            return match self.placeholder {
                Some(placeholder) => Line::from(Span::styled(
                    placeholder,
                    Style::default().fg(colors::MUTED).italic(),
                )),
                None => Line::default(),
            };
        }

        // 可编辑时给光标留一格
        let room = if self.readonly {
            inner_width
        } else {
            inner_width.saturating_sub(1)
        };
        let shown = visible_tail(self.value, room);
        if self.selected {
            Line::from(Span::styled(
                shown,
                Style::default().bg(colors::SELECTION_BG).fg(Color::White),
            ))
        } else {
            Line::from(shown)
        }
    }
}

impl Widget for &InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(2);
        Paragraph::new(self.display_line(inner_width))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.display_title())
                    .border_style(self.border_style()),
            )
            .render(area, buf);
    }
}

/// 取能放进 `width` 列的最长后缀
fn visible_tail(value: &str, width: u16) -> &str {
    let width = usize::from(width);
    let mut used = 0;
    let mut start = value.len();
    for (idx, c) in value.char_indices().rev() {
        let w = Line::from(c.to_string()).width();
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_title() {
        let field = InputField::new("Long URL", "").required();
        assert_eq!(field.display_title(), "Long URL *");

        let field = InputField::new("Short URL", "x").readonly();
        assert!(field.display_title().contains("[readonly]"));
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("https://example.com", 7), "ple.com");
        assert_eq!(visible_tail("abc", 10), "abc");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn test_cursor_follows_value() {
        let area = Rect::new(0, 4, 20, 3);
        let field = InputField::new("Long URL", "abc").active(true);
        assert_eq!(field.cursor_position(area), Some(Position::new(4, 5)));

        let field = InputField::new("Long URL", "abc");
        assert_eq!(field.cursor_position(area), None);
    }

    #[test]
    fn test_render_shows_value() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        (&InputField::new("URL", "hello")).render(area, &mut buf);

        let row: String = (0..12u16).map(|x| buf[(x, 1u16)].symbol().to_string()).collect();
        assert!(row.contains("hello"));
    }
}
