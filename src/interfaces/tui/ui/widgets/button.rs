//! 按钮组件

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::interfaces::tui::constants::colors;

pub struct Button<'a> {
    label: &'a str,
    focused: bool,
    disabled: bool,
    background: Option<Color>,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            disabled: false,
            background: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// 覆盖背景色
    pub fn background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    fn style(&self) -> Style {
        let base = if self.disabled {
            Style::default().fg(colors::MUTED)
        } else if self.focused {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(colors::PRIMARY)
        };

        match self.background {
            Some(bg) => base.bg(bg).fg(Color::White),
            None => base,
        }
    }
}

impl Widget for &Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(self.style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border)
                    .border_style(self.style()),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_override() {
        let button = Button::new("✓ Copied!").background(Some(colors::COPY_ACK_BG));
        assert_eq!(button.style().bg, Some(colors::COPY_ACK_BG));
    }

    #[test]
    fn test_disabled_is_muted() {
        let button = Button::new("⏳ Processing...").focused(true).disabled(true);
        assert_eq!(button.style().fg, Some(colors::MUTED));
    }
}
