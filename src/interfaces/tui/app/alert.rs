//! 提示消息
//!
//! 同一时刻只显示一条提示，新的提示直接替换旧的。停留一段时间后进入
//! 退出动画，动画结束后移除。

use std::time::Duration;

use ratatui::style::Color;
use tracing::{debug, trace};

use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::event::{AppEvent, EventSender};
use crate::interfaces::tui::timer::TimerSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// 每种提示对应的固定配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTreatment {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

impl AlertKind {
    pub fn treatment(self) -> AlertTreatment {
        match self {
            Self::Success => AlertTreatment {
                fg: colors::SUCCESS_FG,
                bg: colors::SUCCESS_BG,
                border: colors::SUCCESS_BORDER,
            },
            Self::Error => AlertTreatment {
                fg: colors::ERROR_FG,
                bg: colors::ERROR_BG,
                border: colors::ERROR_BORDER,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    Visible,
    /// 退出动画进行中
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    pub phase: AlertPhase,
}

pub struct AlertNotifier {
    current: Option<Alert>,
    dismiss_after: Duration,
    exit_after: Duration,
    dismiss_timer: TimerSlot,
    remove_timer: TimerSlot,
}

impl AlertNotifier {
    pub fn new(dismiss_after: Duration, exit_after: Duration, events: EventSender) -> Self {
        Self {
            current: None,
            dismiss_after,
            exit_after,
            dismiss_timer: TimerSlot::new("alert-dismiss", events.clone()),
            remove_timer: TimerSlot::new("alert-remove", events),
        }
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    /// 显示提示，替换当前提示并重新计时
    pub fn show(&mut self, message: impl Into<String>, kind: AlertKind) {
        let message = message.into();
        debug!("Alert ({:?}): {}", kind, message);

        self.remove_timer.cancel();
        self.current = Some(Alert {
            message,
            kind,
            phase: AlertPhase::Visible,
        });
        self.dismiss_timer
            .arm(self.dismiss_after, |generation| AppEvent::AlertExpired {
                generation,
            });
    }

    /// 停留时间到，开始退出动画
    pub fn on_expired(&mut self, generation: u64) {
        if !self.dismiss_timer.is_current(generation) {
            trace!("Ignoring stale alert expiry (gen {})", generation);
            return;
        }
        self.dismiss_timer.clear();

        if let Some(alert) = self.current.as_mut() {
            alert.phase = AlertPhase::Leaving;
            self.remove_timer
                .arm(self.exit_after, |generation| AppEvent::AlertRemoved {
                    generation,
                });
        }
    }

    /// 退出动画结束
    pub fn on_removed(&mut self, generation: u64) {
        if !self.remove_timer.is_current(generation) {
            trace!("Ignoring stale alert removal (gen {})", generation);
            return;
        }
        self.remove_timer.clear();
        self.current = None;
    }
}
