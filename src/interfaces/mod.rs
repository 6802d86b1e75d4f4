//! User interfaces: one-shot CLI and interactive TUI

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
