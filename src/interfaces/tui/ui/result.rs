//! 结果区块

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::widgets::{Button, InputField};
use crate::interfaces::tui::app::{CopyButton, ResultPresenter};
use crate::interfaces::tui::constants::{colors, layout};

pub const RESULT_HEIGHT: u16 =
    layout::SECTION_BORDER + layout::INPUT_HEIGHT + layout::LINK_HEIGHT + layout::BUTTON_HEIGHT;

pub fn render_result(
    result: &ResultPresenter,
    copy_button: &CopyButton,
    copy_focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .title(" Your short link ")
        .title_style(Style::default().fg(colors::SUCCESS_BORDER).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::SUCCESS_BORDER));
    let inner = block.inner(area);
    block.render(area, buf);

    let [field_area, link_area, button_area] = Layout::vertical([
        Constraint::Length(layout::INPUT_HEIGHT),
        Constraint::Length(layout::LINK_HEIGHT),
        Constraint::Length(layout::BUTTON_HEIGHT),
    ])
    .areas(inner);

    InputField::new("Short URL", result.short_url())
        .readonly()
        .selected(result.is_selected())
        .render(field_area, buf);

    Paragraph::new(Line::from(vec![
        Span::styled(" Visit: ", Style::default().fg(colors::MUTED)),
        Span::styled(
            result.visit_path(),
            Style::default().fg(colors::PRIMARY).underlined(),
        ),
    ]))
    .render(link_area, buf);

    let [button_area] = Layout::horizontal([Constraint::Length(20)]).areas(button_area);
    Button::new(copy_button.label())
        .focused(copy_focused)
        .background(copy_button.background())
        .render(button_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shows_visit_path() {
        let mut result = ResultPresenter::new();
        result.present("https://sho.rt/abc", "abc");

        let area = Rect::new(0, 0, 40, RESULT_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_result(&result, &CopyButton::default(), false, area, &mut buf);

        // 外框 1 + 输入框 3 = 第 4 行
        let row: String = (0..40u16).map(|x| buf[(x, 4u16)].symbol().to_string()).collect();
        assert!(row.contains("/abc"), "row: {:?}", row);
    }
}
