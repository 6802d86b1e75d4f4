//! 剪贴板
//!
//! 先写系统剪贴板（arboard），失败时退回 OSC 52 转义序列，由终端代为写入。
//! 退回路径的失败只记日志，不提示用户。

use std::io::Write;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ratatui::style::Color;
use tracing::{debug, trace, warn};

use super::alert::{AlertKind, AlertNotifier};
use super::result::ResultPresenter;
use crate::errors::{ClientError, Result};
use crate::interfaces::tui::constants::{colors, text};
use crate::interfaces::tui::event::{AppEvent, EventSender};
use crate::interfaces::tui::timer::TimerSlot;

/// 剪贴板后端
pub trait ClipboardBackend {
    fn name(&self) -> &'static str;

    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// 系统剪贴板，首次使用时才连接
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| ClientError::clipboard(e.to_string()))?,
        };
        let result = clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClientError::clipboard(e.to_string()));
        // 部分平台上剪贴板内容随句柄一起释放，所以保持连接
        self.inner = Some(clipboard);
        result
    }
}

/// OSC 52 剪贴板
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Osc52Clipboard<std::io::Stderr> {
    /// UI 绘制在 stderr 上，转义序列也写到这里
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// 复制按钮的显示状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButton {
    label: String,
    background: Option<Color>,
    /// 确认状态之前的文本和背景
    saved: Option<(String, Option<Color>)>,
}

impl Default for CopyButton {
    fn default() -> Self {
        Self {
            label: text::COPY_LABEL.to_string(),
            background: None,
            saved: None,
        }
    }
}

impl CopyButton {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn is_acknowledging(&self) -> bool {
        self.saved.is_some()
    }

    fn acknowledge(&mut self) {
        // 连续复制时保留最初的状态，避免恢复成确认文本
        if self.saved.is_none() {
            self.saved = Some((self.label.clone(), self.background));
        }
        self.label = text::COPY_ACK_LABEL.to_string();
        self.background = Some(colors::COPY_ACK_BG);
    }

    fn revert(&mut self) {
        if let Some((label, background)) = self.saved.take() {
            self.label = label;
            self.background = background;
        }
    }
}

pub struct ClipboardHelper {
    primary: Box<dyn ClipboardBackend>,
    fallback: Box<dyn ClipboardBackend>,
    button: CopyButton,
    ack_after: Duration,
    ack_timer: TimerSlot,
}

impl ClipboardHelper {
    pub fn new(
        primary: Box<dyn ClipboardBackend>,
        fallback: Box<dyn ClipboardBackend>,
        ack_after: Duration,
        events: EventSender,
    ) -> Self {
        Self {
            primary,
            fallback,
            button: CopyButton::default(),
            ack_after,
            ack_timer: TimerSlot::new("copy-ack", events),
        }
    }

    pub fn button(&self) -> &CopyButton {
        &self.button
    }

    /// 复制结果链接
    ///
    /// 主后端失败时走 OSC 52 并仍提示成功，但只有主后端成功才显示按钮确认
    pub fn copy(&mut self, result: &mut ResultPresenter, alerts: &mut AlertNotifier) {
        result.select_all();
        let value = result.short_url().to_string();

        match self.primary.set_text(&value) {
            Ok(()) => {
                debug!("Copied \"{}\" via {} clipboard", value, self.primary.name());
                self.button.acknowledge();
                self.ack_timer
                    .arm(self.ack_after, |generation| AppEvent::CopyAckExpired {
                        generation,
                    });
            }
            Err(e) => {
                warn!(
                    "{} clipboard unavailable ({}), falling back to {}",
                    self.primary.name(),
                    e.message(),
                    self.fallback.name()
                );
                if let Err(e) = self.fallback.set_text(&value) {
                    warn!("{} clipboard failed: {}", self.fallback.name(), e);
                }
            }
        }

        alerts.show(text::COPY_SUCCESS, AlertKind::Success);
    }

    /// 确认状态结束，恢复按钮
    pub fn on_ack_expired(&mut self, generation: u64) {
        if !self.ack_timer.is_current(generation) {
            trace!("Ignoring stale copy acknowledgment (gen {})", generation);
            return;
        }
        self.ack_timer.clear();
        self.button.revert();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        let mut clip = Osc52Clipboard::new(Vec::new());
        clip.set_text("https://sho.rt/abc").unwrap();
        let written = String::from_utf8(clip.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;aHR0cHM6Ly9zaG8ucnQvYWJj\x07");
    }

    #[test]
    fn test_copy_button_repeated_ack_keeps_original() {
        let mut button = CopyButton::default();
        button.acknowledge();
        button.acknowledge();
        assert_eq!(button.label(), text::COPY_ACK_LABEL);
        assert_eq!(button.background(), Some(colors::COPY_ACK_BG));

        button.revert();
        assert_eq!(button.label(), text::COPY_LABEL);
        assert_eq!(button.background(), None);
        assert!(!button.is_acknowledging());
    }
}
