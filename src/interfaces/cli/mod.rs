//! CLI interface module
//!
//! One-shot commands against the shortening service. Output goes to stdout
//! with coloured `[SUCCESS]` / `[ERROR]` prefixes.

pub mod commands;

use tracing::debug;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::Result;
use crate::service::HttpShortenService;
use commands::{config_generate, delete_link, shorten_url, show_stats};

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<()> {
    // Generate doesn't talk to the service
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    } = cmd
    {
        return config_generate(output_path, force);
    }

    let service = HttpShortenService::from_config(&config.service)?;
    debug!("CLI using service at {}", service.base_url());

    match cmd {
        Commands::Shorten { url, code } => {
            shorten_url(&service, &url, code.as_deref()).await?;
            Ok(())
        }
        Commands::Stats { short_code } => {
            show_stats(&service, &short_code).await?;
            Ok(())
        }
        Commands::Delete { short_code } => delete_link(&service, &short_code).await,
        Commands::Config { .. } => unreachable!("handled above"),
        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in runtime"),
    }
}
