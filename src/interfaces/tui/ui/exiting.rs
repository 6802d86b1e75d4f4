use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

pub fn draw_exiting_screen(frame: &mut Frame, submitting: bool, area: Rect) {
    let inner_area = Popup::new("Exit Confirmation", popup::EXITING)
        .theme_color(Color::Magenta)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let mut text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Are you sure you want to exit?",
            Style::default().fg(Color::White).bold(),
        )]),
    ];
    if submitting {
        text.push(Line::from(vec![Span::styled(
            "A request is still in progress.",
            Style::default().fg(Color::Yellow),
        )]));
    }
    text.push(Line::from(""));
    text.push(Line::from(vec![Span::styled(
        "Press [y] to quit, [n] to cancel",
        Style::default().fg(Color::DarkGray),
    )]));

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, inner_area);
}
