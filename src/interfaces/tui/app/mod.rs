//! TUI 应用状态
//!
//! App 只负责组合各组件：每个组件持有自己读写的状态，事件通道、服务
//! 和剪贴板在构造时传入。

mod alert;
mod clipboard;
mod form;
mod result;
mod scroll;

use std::sync::Arc;

use tracing::{debug, info, warn};

pub use alert::{Alert, AlertKind, AlertNotifier, AlertPhase, AlertTreatment};
pub use clipboard::{
    ClipboardBackend, ClipboardHelper, CopyButton, Osc52Clipboard, SystemClipboard,
};
pub use form::{Focus, FormController, SubmitControl};
pub use result::ResultPresenter;
pub use scroll::{ScrollState, nearest_offset};

use super::action::Action;
use super::constants::text;
use super::event::{AppEvent, EventSender};
use crate::config::UiConfig;
use crate::errors::{ClientError, Result};
use crate::service::{ShortenResult, ShortenService};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Main,
    Help,
    Exiting,
}

pub struct App {
    pub screen: Screen,
    pub form: FormController,
    pub result: ResultPresenter,
    pub alerts: AlertNotifier,
    pub clipboard: ClipboardHelper,
    pub scroll: ScrollState,
    pub should_quit: bool,
    service: Arc<dyn ShortenService>,
    events: EventSender,
}

impl App {
    pub fn new(
        service: Arc<dyn ShortenService>,
        primary: Box<dyn ClipboardBackend>,
        fallback: Box<dyn ClipboardBackend>,
        ui: &UiConfig,
        events: EventSender,
    ) -> Self {
        Self {
            screen: Screen::Main,
            form: FormController::new(),
            result: ResultPresenter::new(),
            alerts: AlertNotifier::new(ui.alert_dismiss(), ui.alert_exit(), events.clone()),
            clipboard: ClipboardHelper::new(primary, fallback, ui.copy_ack(), events.clone()),
            scroll: ScrollState::default(),
            should_quit: false,
            service,
            events,
        }
    }

    /// 系统剪贴板 + OSC 52
    pub fn with_system_clipboard(
        service: Arc<dyn ShortenService>,
        ui: &UiConfig,
        events: EventSender,
    ) -> Self {
        Self::new(
            service,
            Box::new(SystemClipboard::new()),
            Box::new(Osc52Clipboard::stderr()),
            ui,
            events,
        )
    }

    /// 提交表单
    ///
    /// 请求在后台任务中执行，结果以 `AppEvent::SubmitSettled` 送回。
    /// 外层任务等待内层任务，内层 panic 也会送回 `TaskFailed`。
    pub fn submit(&mut self) {
        let Some(request) = self.form.begin_submit() else {
            debug!("Submit ignored: a request is already in flight");
            return;
        };

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let request_task = tokio::spawn(async move { service.shorten(request).await });
            let outcome = match request_task.await {
                Ok(outcome) => outcome,
                Err(e) => Err(ClientError::from(e)),
            };
            let _ = events.send(AppEvent::SubmitSettled(outcome));
        });
    }

    fn on_submit_settled(&mut self, outcome: Result<ShortenResult>) {
        // 先恢复按钮，保证任何结果下都能再次提交
        self.form.finish_submit();

        match outcome {
            Ok(ShortenResult::Success {
                short_url,
                short_code,
            }) => {
                info!("Shortened to {} ({})", short_url, short_code);
                self.alerts.show(text::SHORTEN_SUCCESS, AlertKind::Success);
                self.result.present(&short_url, &short_code);
                self.form.reset();
            }
            Ok(ShortenResult::Failure { error }) => {
                debug!("Service rejected the request: {}", error);
                self.alerts
                    .show(format!("{}{}", text::ERROR_PREFIX, error), AlertKind::Error);
            }
            Err(e) if e.is_network() => {
                warn!("[{}] {}: {}", e.code(), e.error_type(), e.message());
                self.alerts.show(text::NETWORK_ERROR, AlertKind::Error);
            }
            Err(e) => {
                warn!("[{}] {}: {}", e.code(), e.error_type(), e.message());
                self.alerts
                    .show(format!("{}{}", text::ERROR_PREFIX, e.message()), AlertKind::Error);
            }
        }
    }

    /// 复制结果链接，结果区块隐藏时忽略
    pub fn copy(&mut self) {
        if !self.result.is_visible() {
            return;
        }
        self.clipboard.copy(&mut self.result, &mut self.alerts);
    }

    /// 处理后台事件
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmitSettled(outcome) => self.on_submit_settled(outcome),
            AppEvent::AlertExpired { generation } => self.alerts.on_expired(generation),
            AppEvent::AlertRemoved { generation } => self.alerts.on_removed(generation),
            AppEvent::CopyAckExpired { generation } => self.clipboard.on_ack_expired(generation),
        }
        self.form.normalize_focus(self.result.is_visible());
    }

    /// 执行动作
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::FocusNext => self.form.focus_next(self.result.is_visible()),
            Action::FocusPrev => self.form.focus_prev(self.result.is_visible()),
            Action::InputChar(c) => {
                if self.form.input_char(c) {
                    self.result.on_url_input(&self.form.original_url);
                }
            }
            Action::DeleteChar => {
                if self.form.backspace() {
                    self.result.on_url_input(&self.form.original_url);
                }
            }
            Action::ToggleCustomCode => self.form.toggle_custom_code(),
            Action::Submit => self.submit(),
            Action::Copy => self.copy(),
            Action::ScrollUp => self.scroll.scroll_by(-1),
            Action::ScrollDown => self.scroll.scroll_by(1),
            Action::ShowHelp => self.screen = Screen::Help,
            Action::CloseHelp | Action::CancelExit => self.screen = Screen::Main,
            Action::RequestExit => self.screen = Screen::Exiting,
            Action::ConfirmExit | Action::Quit => self.should_quit = true,
            Action::Noop => {}
        }
        self.form.normalize_focus(self.result.is_visible());
    }

    pub fn on_tick(&mut self) {
        self.scroll.tick();
    }
}
