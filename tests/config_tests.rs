//! Configuration loading tests
//!
//! Files live in temporary directories; only one test touches the
//! environment, and it uses a key no other test asserts on.

use std::fs;

use tempfile::TempDir;

use shortlinker_client::config::{StaticConfig, get_config, init_config};
use shortlinker_client::errors::ClientError;

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("client.toml");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [service]
        base_url = "https://sho.rt"

        [logging]
        format = "json"
        "#,
    );

    let config = StaticConfig::load(Some(&path)).unwrap();
    assert_eq!(config.service.base_url, "https://sho.rt");
    assert_eq!(config.service.timeout_secs, 10);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.ui.tick_rate_ms, 50);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = StaticConfig::load(Some(&path.to_string_lossy())).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)), "got: {:?}", err);
}

#[test]
fn test_invalid_values_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [service]
        base_url = "ftp://files.example.com"
        "#,
    );

    let err = StaticConfig::load(Some(&path)).unwrap_err();
    assert!(err.message().contains("ftp"));

    let path = write_config(
        &dir,
        r#"
        [logging]
        format = "xml"
        "#,
    );
    assert!(StaticConfig::load(Some(&path)).is_err());
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [ui]
        copy_ack_ms = 1000
        "#,
    );

    // SAFETY: no other test in this binary reads ui.copy_ack_ms
    unsafe { std::env::set_var("SLC__UI__COPY_ACK_MS", "1234") };
    let config = StaticConfig::load(Some(&path)).unwrap();
    unsafe { std::env::remove_var("SLC__UI__COPY_ACK_MS") };

    assert_eq!(config.ui.copy_ack_ms, 1234);
}

#[test]
fn test_saved_file_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("client.toml");

    let mut config = StaticConfig::default();
    config.service.base_url = "https://s.example.com/base".into();
    config.logging.file = Some("client.log".into());
    config.save_to_file(&path).unwrap();

    let loaded = StaticConfig::load(Some(&path.to_string_lossy())).unwrap();
    assert_eq!(loaded.service, config.service);
    assert_eq!(loaded.logging, config.logging);
}

#[test]
fn test_global_config_store() {
    let mut config = StaticConfig::default();
    config.service.timeout_secs = 3;
    init_config(config);
    assert_eq!(get_config().service.timeout_secs, 3);
}
