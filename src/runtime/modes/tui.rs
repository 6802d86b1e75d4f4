//! TUI mode

use std::sync::Arc;

use anyhow::Context;

use crate::config::StaticConfig;
use crate::service::{HttpShortenService, ShortenService};

/// Build the HTTP service and hand the terminal over to the TUI
pub async fn run_tui(config: &StaticConfig) -> anyhow::Result<()> {
    let service: Arc<dyn ShortenService> = Arc::new(
        HttpShortenService::from_config(&config.service)
            .context("Failed to create service client")?,
    );

    crate::interfaces::tui::run_tui(config, service)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
