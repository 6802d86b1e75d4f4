use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, Focus, Screen};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version and target service
pub fn draw_title_bar(frame: &mut Frame, base_url: &str, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled(
            "Shortlinker Client",
            Style::default().fg(colors::PRIMARY).bold(),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(base_url.to_string(), Style::default().fg(Color::Yellow)),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.screen {
        Screen::Main => {
            let mut keys = vec![("Tab", "Next", Color::Cyan)];
            match app.form.focus() {
                Focus::CustomCodeToggle => keys.push(("Space", "Toggle", Color::Yellow)),
                Focus::Copy => keys.push(("Enter", "Copy", Color::Green)),
                _ => keys.push(("Enter", "Shorten", Color::Green)),
            }
            if app.result.is_visible() {
                keys.push(("Ctrl-Y", "Copy link", Color::Green));
            }
            keys.push(("F1", "Help", Color::Blue));
            keys.push(("Esc", "Quit", Color::Magenta));
            keys
        }
        Screen::Help => vec![("Esc", "Close", Color::Cyan)],
        Screen::Exiting => vec![
            ("y", "Quit", Color::Red),
            ("n", "Cancel", Color::Cyan),
        ],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(*key, Style::default().fg(*color).bold()));
        spans.push(Span::raw(format!(" {}", desc)));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
