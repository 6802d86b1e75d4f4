//! CLI mode

use std::process::ExitCode;

use tracing::debug;

use crate::cli::Commands;
use crate::config::StaticConfig;

/// Run one CLI command, printing failures with their error code
pub async fn run_cli(cmd: Commands, config: &StaticConfig) -> ExitCode {
    debug!("Running CLI command: {:?}", cmd);
    match crate::interfaces::cli::run_cli_command(cmd, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            ExitCode::FAILURE
        }
    }
}
