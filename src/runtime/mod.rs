//! Application startup
//!
//! Loads configuration, installs logging and dispatches to the selected mode.

pub mod modes;

use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::config::{StaticConfig, get_config, init_config};
use crate::system::logging::{ConsoleTarget, init_logging};
use modes::Mode;

/// Run the client for parsed command-line arguments
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("[WARN] Failed to read .env: {}", e);
    }

    let mut config =
        StaticConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
        config
            .validate()
            .context("Invalid --base-url argument")?;
    }

    let mode = modes::detect_mode(cli.command.as_ref());

    #[cfg(feature = "tui")]
    let console = if mode == Mode::Tui {
        ConsoleTarget::Discard
    } else {
        ConsoleTarget::Stderr
    };
    #[cfg(not(feature = "tui"))]
    let console = ConsoleTarget::Stderr;

    let _guard = init_logging(&config.logging, console).context("Failed to initialize logging")?;
    init_config(config);
    let config = get_config();
    debug!("Starting in {:?} mode", mode);

    match (mode, cli.command) {
        #[cfg(feature = "tui")]
        (Mode::Tui, _) => {
            modes::run_tui(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
        #[cfg(feature = "cli")]
        (Mode::Cli, Some(cmd)) => Ok(modes::run_cli(cmd, &config).await),
        _ => {
            warn!("No runnable mode: enable the `cli` or `tui` feature");
            eprintln!("No runnable mode for this build (features: cli, tui)");
            Ok(ExitCode::FAILURE)
        }
    }
}
