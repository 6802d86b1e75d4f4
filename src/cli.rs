//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Shortlinker client - terminal front-end for a Shortlinker service
#[derive(Parser, Debug)]
#[command(name = "shortlinker-client")]
#[command(version)]
#[command(about = "Shorten URLs against a Shortlinker service", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the service base URL
    #[arg(long, short = 'u', global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start TUI mode (default)
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL
    Shorten {
        /// URL to shorten
        url: String,

        /// Custom short code (service picks one when omitted)
        #[arg(long)]
        code: Option<String>,
    },

    /// Show click statistics for a short code
    Stats {
        short_code: String,
    },

    /// Delete a short code
    Delete {
        short_code: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}
