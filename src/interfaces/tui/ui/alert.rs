use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{AlertNotifier, AlertPhase};

/// Draw the current alert, or leave the line empty
pub fn draw_alert(frame: &mut Frame, alerts: &AlertNotifier, area: Rect) {
    let Some(alert) = alerts.current() else {
        return;
    };

    let treatment = alert.kind.treatment();
    let mut text_style = Style::default().fg(treatment.fg).bg(treatment.bg).bold();
    let mut border_style = Style::default().fg(treatment.border).bg(treatment.bg);
    if alert.phase == AlertPhase::Leaving {
        text_style = text_style.add_modifier(Modifier::DIM);
        border_style = border_style.add_modifier(Modifier::DIM);
    }

    let paragraph = Paragraph::new(alert.message.as_str())
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);
}
