//! 表单区块

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::widgets::{Button, InputField};
use crate::interfaces::tui::app::{Focus, FormController};
use crate::interfaces::tui::constants::{colors, layout};

/// 表单区块总高度
pub fn form_height(form: &FormController) -> u16 {
    let mut height = layout::SECTION_BORDER
        + layout::INPUT_HEIGHT
        + layout::TOGGLE_HEIGHT
        + layout::BUTTON_HEIGHT;
    if form.custom_code_enabled() {
        height += layout::INPUT_HEIGHT;
    }
    height
}

/// 绘制表单，返回焦点输入框的光标位置
pub fn render_form(form: &FormController, area: Rect, buf: &mut Buffer) -> Option<Position> {
    let block = Block::default()
        .title(" Shorten a URL ")
        .title_style(Style::default().fg(colors::PRIMARY).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::PRIMARY));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut constraints = vec![
        Constraint::Length(layout::INPUT_HEIGHT),
        Constraint::Length(layout::TOGGLE_HEIGHT),
    ];
    if form.custom_code_enabled() {
        constraints.push(Constraint::Length(layout::INPUT_HEIGHT));
    }
    constraints.push(Constraint::Length(layout::BUTTON_HEIGHT));
    let rows = Layout::vertical(constraints).split(inner);

    let focus = form.focus();

    let url_field = InputField::new("Long URL", &form.original_url)
        .required()
        .placeholder("https://example.com/a/very/long/path")
        .active(focus == Focus::OriginalUrl);
    url_field.render(rows[0], buf);
    let mut cursor = url_field.cursor_position(rows[0]);

    render_toggle(form, rows[1], buf);

    let mut next = 2;
    if form.custom_code_enabled() {
        let code_field = InputField::new("Custom code", &form.custom_code)
            .placeholder("leave empty for a random code")
            .active(focus == Focus::CustomCode);
        code_field.render(rows[next], buf);
        cursor = cursor.or(code_field.cursor_position(rows[next]));
        next += 1;
    }

    let submit = form.submit_control();
    let [button_area] = Layout::horizontal([Constraint::Length(24)]).areas(rows[next]);
    Button::new(submit.label())
        .focused(focus == Focus::Submit)
        .disabled(submit.is_disabled())
        .render(button_area, buf);

    cursor
}

fn render_toggle(form: &FormController, area: Rect, buf: &mut Buffer) {
    let mark = if form.custom_code_enabled() { "[x]" } else { "[ ]" };
    let style = if form.focus() == Focus::CustomCodeToggle {
        Style::default()
            .fg(colors::HIGHLIGHT_FG)
            .bg(colors::HIGHLIGHT_BG)
            .bold()
    } else {
        Style::default()
    };
    Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} Use a custom code", mark), style),
        Span::styled("  (Space to toggle)", Style::default().fg(colors::MUTED)),
    ]))
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_height_grows_with_custom_code() {
        let mut form = FormController::new();
        assert_eq!(form_height(&form), 9);
        form.toggle_custom_code();
        assert_eq!(form_height(&form), 12);
    }

    #[test]
    fn test_render_places_cursor_in_url_field() {
        let mut form = FormController::new();
        form.original_url = "ab".into();
        let area = Rect::new(0, 0, 40, form_height(&form));
        let mut buf = Buffer::empty(area);

        let cursor = render_form(&form, area, &mut buf);
        // 外框 1 + 输入框边框 1 + 两个字符
        assert_eq!(cursor, Some(Position::new(4, 2)));
    }
}
