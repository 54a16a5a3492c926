//! Unit tests for configuration module

use monsters_api::config::{LogFormat, Settings};
use std::fs;

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.server.request_timeout_secs, 30);
    assert_eq!(settings.database.max_connections, 5);
    assert!(settings.database.run_migrations);
    assert!(settings.cache.enabled);
    assert_eq!(settings.cache.ttl_secs, 30);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_load_without_files_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let settings = Settings::load_from_dir(dir.path(), "development").unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.database.url, "sqlite://monsters.db");
    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
fn test_environment_file_overrides_default_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.yaml"),
        "server:\n  port: 4000\ndatabase:\n  url: sqlite://default.db\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("staging.yaml"),
        "database:\n  url: sqlite://staging.db\nlogging:\n  format: pretty\n",
    )
    .unwrap();

    let settings = Settings::load_from_dir(dir.path(), "staging").unwrap();

    assert_eq!(settings.server.port, 4000);
    assert_eq!(settings.database.url, "sqlite://staging.db");
    assert_eq!(settings.logging.format, LogFormat::Pretty);

    let other = Settings::load_from_dir(dir.path(), "production").unwrap();
    assert_eq!(other.database.url, "sqlite://default.db");
}

#[test]
fn test_unknown_log_format_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.yaml"), "logging:\n  format: xml\n").unwrap();

    assert!(Settings::load_from_dir(dir.path(), "development").is_err());
}

#[test]
fn test_settings_validation_invalid_port() {
    let mut settings = Settings::default();
    settings.server.port = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_empty_database_url() {
    let mut settings = Settings::default();
    settings.database.url = "  ".to_string();

    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_zero_connections() {
    let mut settings = Settings::default();
    settings.database.max_connections = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn test_file_with_port_zero_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.yaml"), "server:\n  port: 0\n").unwrap();

    assert!(Settings::load_from_dir(dir.path(), "development").is_err());
}
