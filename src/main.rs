use std::process::ExitCode;

use clap::Parser;

use shortlinker_client::cli::Cli;
use shortlinker_client::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    runtime::run(cli).await
}
