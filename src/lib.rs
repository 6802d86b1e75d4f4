//! Shortlinker client - terminal front-end for a URL-shortening service
//!
//! Submits URLs (with an optional custom code) to a Shortlinker service,
//! shows the generated short link, copies it to the clipboard and keeps the
//! user informed through transient alerts.
//!
//! # Features
//! - **cli**: One-shot commands (`shorten`, `stats`, `delete`, `config`)
//! - **tui**: Interactive terminal user interface (default mode)
//!
//! # Architecture
//! - `service`: HTTP contract with the shortening service
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Layered configuration (defaults, TOML, environment)
//! - `runtime`: Startup and mode dispatch
//! - `system`: Logging

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod service;
pub mod system;
