use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &str) -> Line<'_> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry<'a>(keys: &'a str, desc: &'a str, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<16} ", keys), Style::default().fg(color)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        Line::from(""),
        section("FORM"),
        entry("Tab / Shift-Tab", "Move between controls", Color::Cyan),
        entry("Space", "Toggle custom code", Color::Cyan),
        entry("Enter", "Shorten URL / press focused button", Color::Green),
        entry("Backspace", "Delete character", Color::Cyan),
        Line::from(""),
        section("RESULT"),
        entry("Ctrl-Y", "Copy short link to clipboard", Color::Green),
        entry("Up / Down", "Scroll content", Color::Cyan),
        Line::from(""),
        section("GENERAL"),
        entry("F1, ?", "Show this help", Color::Blue),
        entry("Esc", "Close help / quit", Color::Magenta),
        entry("Ctrl-C", "Quit immediately", Color::Red),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Typing a new URL hides the previous result.",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}
