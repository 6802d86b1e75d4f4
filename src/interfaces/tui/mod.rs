//! Terminal User Interface (TUI) module
//!
//! Interactive front-end for the shortening service: one form, one result
//! panel, transient alerts.
//!
//! The event loop is a single task that multiplexes three sources:
//! terminal key events, background [`event::AppEvent`]s (request results and
//! timers) and a render tick driving smooth scrolling.

pub mod action;
pub mod app;
pub mod constants;
pub mod event;
pub mod event_handler;
pub mod timer;
pub mod ui;

use std::io::{self, Stderr};
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::service::ShortenService;
use app::App;
use event::EventReceiver;

type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
pub async fn run_tui(
    config: &StaticConfig,
    service: Arc<dyn ShortenService>,
) -> color_eyre::Result<()> {
    color_eyre::install()?;
    install_panic_hook();

    let (tx, mut rx) = event::channel();
    let mut app = App::with_system_clipboard(service, &config.ui, tx);

    let mut terminal = setup_terminal().wrap_err("failed to initialise terminal")?;
    info!("TUI started against {}", config.service.base_url);

    let res = run_app(
        &mut terminal,
        &mut app,
        &mut rx,
        &config.service.base_url,
        config.ui.tick_rate(),
    )
    .await;

    restore_terminal().wrap_err("failed to restore terminal")?;
    terminal.show_cursor()?;
    info!("TUI exited");

    res
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stderr))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stderr(), LeaveAlternateScreen)
}

/// 发生 panic 时先恢复终端，否则错误信息会被备用屏幕吞掉
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}

/// Main application loop
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut EventReceiver,
    base_url: &str,
    tick_rate: Duration,
) -> color_eyre::Result<()> {
    let mut keys = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| ui::draw(f, app, base_url))?;

        tokio::select! {
            maybe_event = keys.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let action = event_handler::map_key(app, key);
                    debug!("Key {:?} -> {:?}", key.code, action);
                    app.dispatch(action);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).wrap_err("failed to read terminal event"),
                None => break,
            },
            Some(event) = rx.recv() => app.handle_event(event),
            _ = ticker.tick() => app.on_tick(),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
