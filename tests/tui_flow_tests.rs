//! TUI flow tests
//!
//! Drive `App` through actions and background events with an in-memory
//! service and clipboard. Time is paused, so timers fire deterministically.

#![cfg(feature = "tui")]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use shortlinker_client::config::UiConfig;
use shortlinker_client::errors::{ClientError, Result};
use shortlinker_client::interfaces::tui::action::Action;
use shortlinker_client::interfaces::tui::app::{
    AlertKind, AlertPhase, App, ClipboardBackend, Focus, Screen,
};
use shortlinker_client::interfaces::tui::constants::text;
use shortlinker_client::interfaces::tui::event::{self, AppEvent, EventReceiver};
use shortlinker_client::interfaces::tui::event_handler::map_key;
use shortlinker_client::service::{LinkStats, ShortenRequest, ShortenResult, ShortenService};

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Default)]
struct StubService {
    responses: Mutex<VecDeque<Result<ShortenResult>>>,
    requests: Mutex<Vec<ShortenRequest>>,
    delay: Option<Duration>,
    panics: bool,
}

impl StubService {
    fn answering(responses: Vec<Result<ShortenResult>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Default::default()
        }
    }

    fn requests(&self) -> Vec<ShortenRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortenService for StubService {
    async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResult> {
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.panics {
            panic!("stub service exploded");
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport("no stubbed response")))
    }

    async fn stats(&self, _short_code: &str) -> Result<LinkStats> {
        Err(ClientError::service("not stubbed"))
    }

    async fn delete(&self, _short_code: &str) -> Result<String> {
        Err(ClientError::service("not stubbed"))
    }
}

struct RecordingClipboard {
    name: &'static str,
    written: Rc<RefCell<Vec<String>>>,
    fails: bool,
}

impl ClipboardBackend for RecordingClipboard {
    fn name(&self) -> &'static str {
        self.name
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fails {
            return Err(ClientError::clipboard("no display available"));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct Harness {
    app: App,
    rx: EventReceiver,
    service: Arc<StubService>,
    primary: Rc<RefCell<Vec<String>>>,
    fallback: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    fn new(service: StubService) -> Self {
        Self::build(service, false)
    }

    fn with_broken_clipboard(service: StubService) -> Self {
        Self::build(service, true)
    }

    fn build(service: StubService, primary_fails: bool) -> Self {
        let (tx, rx) = event::channel();
        let service = Arc::new(service);
        let primary = Rc::new(RefCell::new(Vec::new()));
        let fallback = Rc::new(RefCell::new(Vec::new()));

        let app = App::new(
            service.clone(),
            Box::new(RecordingClipboard {
                name: "primary",
                written: primary.clone(),
                fails: primary_fails,
            }),
            Box::new(RecordingClipboard {
                name: "fallback",
                written: fallback.clone(),
                fails: false,
            }),
            &UiConfig::default(),
            tx,
        );

        Self {
            app,
            rx,
            service,
            primary,
            fallback,
        }
    }

    fn type_text(&mut self, s: &str) {
        for c in s.chars() {
            self.app.dispatch(Action::InputChar(c));
        }
    }

    /// Wait for the next background event and hand it to the app
    async fn pump(&mut self) -> AppEvent {
        let ev = self.rx.recv().await.expect("event channel closed");
        self.app.handle_event(ev.clone());
        ev
    }

    fn alert(&self) -> Option<(String, AlertKind, AlertPhase)> {
        self.app
            .alerts
            .current()
            .map(|a| (a.message.clone(), a.kind, a.phase))
    }

    fn submit_enabled_with_original_label(&self) -> bool {
        let control = self.app.form.submit_control();
        !control.is_disabled() && control.label() == text::SUBMIT_LABEL
    }

    /// Submit a URL that the stub shortens to https://sho.rt/abc
    async fn shorten_ok(&mut self) {
        self.type_text("https://example.com/a/long/path");
        self.app.dispatch(Action::Submit);
        let ev = self.pump().await;
        assert!(matches!(ev, AppEvent::SubmitSettled(Ok(_))));
    }
}

fn success(code: &str) -> Result<ShortenResult> {
    Ok(ShortenResult::Success {
        short_url: format!("https://sho.rt/{}", code),
        short_code: code.to_string(),
    })
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_submit_success_presents_result_and_resets_form() {
    let mut h = Harness::new(StubService::answering(vec![success("abc")]));
    h.type_text("https://example.com/a/long/path");

    h.app.dispatch(Action::Submit);
    assert!(h.app.form.is_submitting());
    assert_eq!(
        h.app.form.submit_control().label(),
        text::SUBMIT_BUSY_LABEL
    );

    h.pump().await;

    assert!(h.submit_enabled_with_original_label());
    assert!(h.app.result.is_visible());
    assert_eq!(h.app.result.short_url(), "https://sho.rt/abc");
    assert_eq!(h.app.result.visit_path(), "/abc");
    assert_eq!(
        h.alert(),
        Some((
            text::SHORTEN_SUCCESS.to_string(),
            AlertKind::Success,
            AlertPhase::Visible
        ))
    );

    assert!(h.app.form.original_url.is_empty());
    assert!(!h.app.form.custom_code_enabled());
    assert_eq!(
        h.service.requests(),
        vec![ShortenRequest::new("https://example.com/a/long/path", "")]
    );
}

#[tokio::test(start_paused = true)]
async fn test_submit_sends_custom_code() {
    let mut h = Harness::new(StubService::answering(vec![success("promo")]));
    h.type_text("https://example.com");
    h.app.dispatch(Action::ToggleCustomCode);
    assert_eq!(h.app.form.focus(), Focus::CustomCode);
    h.type_text(" promo ");

    h.app.dispatch(Action::Submit);
    h.pump().await;

    assert_eq!(h.service.requests()[0].custom_code, "promo");
    assert_eq!(h.app.result.visit_path(), "/promo");
    assert!(h.app.form.custom_code.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_service_failure_shows_error_and_keeps_result_hidden() {
    let mut h = Harness::new(StubService::answering(vec![Ok(ShortenResult::Failure {
        error: "code taken".into(),
    })]));
    h.type_text("https://example.com");

    h.app.dispatch(Action::Submit);
    h.pump().await;

    assert!(h.submit_enabled_with_original_label());
    let (message, kind, _) = h.alert().unwrap();
    assert_eq!(kind, AlertKind::Error);
    assert!(message.contains("code taken"));
    assert_eq!(message, "❌ code taken");
    assert!(!h.app.result.is_visible());
    // 失败时不重置表单
    assert_eq!(h.app.form.original_url, "https://example.com");
}

#[tokio::test(start_paused = true)]
async fn test_service_failure_leaves_previous_result_unchanged() {
    let mut h = Harness::new(StubService::answering(vec![
        success("abc"),
        Ok(ShortenResult::Failure {
            error: "code taken".into(),
        }),
    ]));
    h.shorten_ok().await;

    // 提交空 URL 不会触发隐藏，结果区块保持原样
    h.app.dispatch(Action::Submit);
    h.pump().await;

    assert!(h.app.result.is_visible());
    assert_eq!(h.app.result.short_url(), "https://sho.rt/abc");
}

#[tokio::test(start_paused = true)]
async fn test_network_error_shows_generic_alert() {
    let mut h = Harness::new(StubService::answering(vec![Err(ClientError::transport(
        "connection refused",
    ))]));
    h.type_text("https://example.com");

    h.app.dispatch(Action::Submit);
    h.pump().await;

    assert!(h.submit_enabled_with_original_label());
    let (message, kind, _) = h.alert().unwrap();
    assert_eq!(message, text::NETWORK_ERROR);
    assert_eq!(kind, AlertKind::Error);
}

#[tokio::test(start_paused = true)]
async fn test_decode_error_shows_generic_alert() {
    let mut h = Harness::new(StubService::answering(vec![Err(ClientError::decode(
        "expected value at line 1 column 1",
    ))]));
    h.type_text("https://example.com");

    h.app.dispatch(Action::Submit);
    h.pump().await;

    assert_eq!(h.alert().unwrap().0, text::NETWORK_ERROR);
}

#[tokio::test(start_paused = true)]
async fn test_crashed_request_task_restores_submit_control() {
    let mut h = Harness::new(StubService {
        panics: true,
        ..Default::default()
    });
    h.type_text("https://example.com");

    h.app.dispatch(Action::Submit);
    let ev = h.pump().await;

    assert!(matches!(
        ev,
        AppEvent::SubmitSettled(Err(ClientError::TaskFailed(_)))
    ));
    assert!(h.submit_enabled_with_original_label());
    assert_eq!(h.alert().unwrap().0, text::NETWORK_ERROR);
}

#[tokio::test(start_paused = true)]
async fn test_submit_ignored_while_in_flight() {
    let mut h = Harness::new(StubService {
        responses: Mutex::new(vec![success("abc"), success("def")].into()),
        delay: Some(Duration::from_secs(1)),
        ..Default::default()
    });
    h.type_text("https://example.com");

    h.app.dispatch(Action::Submit);
    h.app.dispatch(Action::Submit);
    h.app.dispatch(Action::Submit);
    h.pump().await;

    assert_eq!(h.service.requests().len(), 1);
    assert!(h.submit_enabled_with_original_label());
    assert_eq!(h.app.result.short_url(), "https://sho.rt/abc");
}

// =============================================================================
// Result panel
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_typing_after_result_hides_panel() {
    let mut h = Harness::new(StubService::answering(vec![success("abc")]));
    h.shorten_ok().await;
    assert!(h.app.result.is_visible());
    assert!(h.app.result.take_scroll_request());

    // 空输入框上退格不算新内容
    h.app.dispatch(Action::DeleteChar);
    assert!(h.app.result.is_visible());

    h.app.dispatch(Action::InputChar(' '));
    assert!(h.app.result.is_visible());

    h.app.dispatch(Action::InputChar('h'));
    assert!(!h.app.result.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_focus_leaves_copy_button_when_result_hides() {
    let mut h = Harness::new(StubService::answering(vec![success("abc")]));
    h.shorten_ok().await;

    h.app.dispatch(Action::FocusPrev);
    assert_eq!(h.app.form.focus(), Focus::Copy);

    h.app.form.set_focus(Focus::OriginalUrl);
    h.app.dispatch(Action::InputChar('x'));
    h.app.dispatch(Action::FocusPrev);
    assert_eq!(h.app.form.focus(), Focus::Submit);
}

// =============================================================================
// Clipboard
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_copy_writes_clipboard_and_acknowledges_for_two_seconds() {
    let mut h = Harness::new(StubService::answering(vec![success("abc")]));
    h.shorten_ok().await;

    h.app.dispatch(Action::Copy);
    assert_eq!(*h.primary.borrow(), vec!["https://sho.rt/abc".to_string()]);
    assert!(h.fallback.borrow().is_empty());
    assert!(h.app.result.is_selected());
    assert_eq!(h.alert().unwrap().0, text::COPY_SUCCESS);
    assert_eq!(h.app.clipboard.button().label(), text::COPY_ACK_LABEL);

    tokio::time::sleep(Duration::from_millis(1900)).await;
    assert!(h.rx.try_recv().is_err());

    let ev = h.pump().await;
    assert!(matches!(ev, AppEvent::CopyAckExpired { .. }));
    assert_eq!(h.app.clipboard.button().label(), text::COPY_LABEL);
    assert_eq!(h.app.clipboard.button().background(), None);
}

#[tokio::test(start_paused = true)]
async fn test_copy_falls_back_and_still_reports_success() {
    let mut h = Harness::with_broken_clipboard(StubService::answering(vec![success("abc")]));
    h.shorten_ok().await;

    h.app.dispatch(Action::Copy);

    assert!(h.primary.borrow().is_empty());
    assert_eq!(*h.fallback.borrow(), vec!["https://sho.rt/abc".to_string()]);
    let (message, kind, _) = h.alert().unwrap();
    assert_eq!(message, text::COPY_SUCCESS);
    assert_eq!(kind, AlertKind::Success);

    // No acknowledgment on the fallback path
    assert_eq!(h.app.clipboard.button().label(), text::COPY_LABEL);
    assert_eq!(h.app.clipboard.button().background(), None);

    tokio::time::sleep(Duration::from_millis(2500)).await;
    while let Ok(ev) = h.rx.try_recv() {
        assert!(
            !matches!(ev, AppEvent::CopyAckExpired { .. }),
            "unexpected event: {:?}",
            ev
        );
    }
    assert_eq!(h.app.clipboard.button().label(), text::COPY_LABEL);
}

#[tokio::test(start_paused = true)]
async fn test_copy_without_result_is_ignored() {
    let mut h = Harness::new(StubService::default());

    h.app.dispatch(Action::Copy);

    assert!(h.primary.borrow().is_empty());
    assert!(h.alert().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_second_copy_reverts_to_original_label() {
    let mut h = Harness::new(StubService::answering(vec![success("abc")]));
    h.shorten_ok().await;

    h.app.dispatch(Action::Copy);
    tokio::time::sleep(Duration::from_secs(1)).await;
    h.app.dispatch(Action::Copy);

    // 第一次的定时器已被取消
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(h.rx.try_recv().is_err());
    assert_eq!(h.app.clipboard.button().label(), text::COPY_ACK_LABEL);

    let ev = h.pump().await;
    assert!(matches!(ev, AppEvent::CopyAckExpired { .. }));
    assert_eq!(h.app.clipboard.button().label(), text::COPY_LABEL);
}

// =============================================================================
// Alerts
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_alert_dismisses_after_five_seconds_with_exit_phase() {
    let mut h = Harness::new(StubService::answering(vec![success("abc")]));
    h.shorten_ok().await;

    let ev = h.pump().await;
    assert!(matches!(ev, AppEvent::AlertExpired { .. }));
    assert_eq!(h.alert().unwrap().2, AlertPhase::Leaving);

    let ev = h.pump().await;
    assert!(matches!(ev, AppEvent::AlertRemoved { .. }));
    assert!(h.alert().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_second_alert_not_removed_by_first_timer() {
    let mut h = Harness::new(StubService::answering(vec![success("abc")]));
    h.shorten_ok().await;

    tokio::time::sleep(Duration::from_secs(3)).await;
    h.app.dispatch(Action::Copy);

    // t=5s: 第一条提示的定时器本该触发，只收到复制确认结束
    let ev = h.pump().await;
    assert!(matches!(ev, AppEvent::CopyAckExpired { .. }));
    let (message, _, phase) = h.alert().unwrap();
    assert_eq!(message, text::COPY_SUCCESS);
    assert_eq!(phase, AlertPhase::Visible);

    // t=8s: 第二条提示开始退出
    let ev = h.pump().await;
    assert!(matches!(ev, AppEvent::AlertExpired { .. }));
    assert_eq!(h.alert().unwrap().2, AlertPhase::Leaving);
}

// =============================================================================
// Custom code toggle and keys
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_toggle_on_then_off_clears_code() {
    let mut h = Harness::new(StubService::default());
    h.app.dispatch(Action::ToggleCustomCode);
    h.type_text("mycode");
    assert_eq!(h.app.form.custom_code, "mycode");

    h.app.dispatch(Action::ToggleCustomCode);
    assert!(h.app.form.custom_code.is_empty());
    assert!(!h.app.form.custom_code_enabled());

    h.app.dispatch(Action::ToggleCustomCode);
    assert!(h.app.form.custom_code.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_exit_confirmation_keys() {
    let mut h = Harness::new(StubService::default());

    let action = map_key(&h.app, key(KeyCode::Esc));
    h.app.dispatch(action);
    assert_eq!(h.app.screen, Screen::Exiting);

    let action = map_key(&h.app, key(KeyCode::Char('n')));
    h.app.dispatch(action);
    assert_eq!(h.app.screen, Screen::Main);
    assert!(!h.app.should_quit);

    h.app.dispatch(Action::RequestExit);
    let action = map_key(&h.app, key(KeyCode::Char('y')));
    h.app.dispatch(action);
    assert!(h.app.should_quit);
}

#[tokio::test(start_paused = true)]
async fn test_help_and_ctrl_c() {
    let mut h = Harness::new(StubService::default());

    let action = map_key(&h.app, key(KeyCode::F(1)));
    h.app.dispatch(action);
    assert_eq!(h.app.screen, Screen::Help);

    let action = map_key(&h.app, key(KeyCode::Esc));
    h.app.dispatch(action);
    assert_eq!(h.app.screen, Screen::Main);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(&h.app, ctrl_c), Action::Quit);
}
