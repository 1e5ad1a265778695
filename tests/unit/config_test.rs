//! Tests for service configuration

use std::fs;

use receipt_points::config::{ServerConfig, ServiceConfig};
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = ServiceConfig::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.workers, 4);
    assert_eq!(config.server.addr(), "127.0.0.1:8080");
}

#[test]
fn test_config_partial_file_keeps_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server]\nport = 9000\n").unwrap();

    let config = ServiceConfig::load(Some(&path)).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.workers, 4);
}

#[test]
fn test_config_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(ServiceConfig::load(Some(&path)).unwrap(), ServiceConfig::default());
}

#[test]
fn test_config_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 80\nworkers = 16\n").unwrap();

    let config = ServiceConfig::load(Some(&path)).unwrap();
    assert_eq!(
        config.server,
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 80,
            workers: 16,
        }
    );
}

#[test]
fn test_config_explicit_missing_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.toml");

    let err = ServiceConfig::load(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
}

#[test]
fn test_config_invalid_toml_names_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[server\nport = \"eighty\"").unwrap();

    let err = ServiceConfig::load(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn test_config_zero_workers_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server]\nworkers = 0\n").unwrap();

    let config = ServiceConfig::load(Some(&path)).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("workers"));
}

#[test]
fn test_config_override_replaces_bad_file_value() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server]\nport = 9000\nworkers = 0\n").unwrap();

    let config = ServiceConfig::load(Some(&path)).unwrap().with_overrides(None, None, Some(2));
    config.validate().unwrap();
    assert_eq!(config.server.workers, 2);
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_config_overrides() {
    let config = ServiceConfig::default().with_overrides(Some("0.0.0.0".to_string()), None, Some(2));
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.workers, 2);

    let config = ServiceConfig::default().with_overrides(None, None, Some(0));
    assert!(config.validate().is_err());
}
