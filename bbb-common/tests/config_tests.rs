//! Integration tests for configuration resolution
//!
//! Priority per setting: command line > environment > TOML file > default.
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate BBB_DATABASE or BBB_BIND are marked with #[serial].

use bbb_common::config::{
    ConfigOverrides, DashboardConfig, TomlConfig, DEFAULT_BIND, DEFAULT_DATABASE, ENV_BIND,
    ENV_DATABASE,
};
use bbb_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn clear_env() {
    env::remove_var(ENV_DATABASE);
    env::remove_var(ENV_BIND);
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes())
        .expect("Should write config");
    file
}

#[test]
#[serial]
fn test_empty_config_file_uses_defaults() {
    clear_env();
    let file = write_config("");

    let config = DashboardConfig::resolve(ConfigOverrides {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(config.database, PathBuf::from(DEFAULT_DATABASE));
    assert_eq!(config.bind, DEFAULT_BIND);
}

#[test]
#[serial]
fn test_toml_file_overrides_defaults() {
    clear_env();
    let file = write_config(
        r#"
        database = "/srv/bb/belly_button_biodiversity.sqlite"
        bind = "0.0.0.0:8080"
        "#,
    );

    let config = DashboardConfig::resolve(ConfigOverrides {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(
        config.database,
        PathBuf::from("/srv/bb/belly_button_biodiversity.sqlite")
    );
    assert_eq!(config.bind, "0.0.0.0:8080");
}

#[test]
#[serial]
fn test_env_overrides_toml_file() {
    clear_env();
    let file = write_config(
        r#"
        database = "/from/toml.sqlite"
        bind = "0.0.0.0:8080"
        "#,
    );
    env::set_var(ENV_DATABASE, "/from/env.sqlite");

    let config = DashboardConfig::resolve(ConfigOverrides {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(config.database, PathBuf::from("/from/env.sqlite"));
    // Not set in the environment, so the file still wins
    assert_eq!(config.bind, "0.0.0.0:8080");

    clear_env();
}

#[test]
#[serial]
fn test_command_line_overrides_env() {
    clear_env();
    let file = write_config("");
    env::set_var(ENV_DATABASE, "/from/env.sqlite");
    env::set_var(ENV_BIND, "127.0.0.1:1111");

    let config = DashboardConfig::resolve(ConfigOverrides {
        database: Some(PathBuf::from("/from/cli.sqlite")),
        bind: Some("127.0.0.1:2222".to_string()),
        config_file: Some(file.path().to_path_buf()),
    })
    .unwrap();

    assert_eq!(config.database, PathBuf::from("/from/cli.sqlite"));
    assert_eq!(config.bind, "127.0.0.1:2222");

    clear_env();
}

#[test]
#[serial]
fn test_explicit_missing_config_file_is_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();

    let result = DashboardConfig::resolve(ConfigOverrides {
        config_file: Some(dir.path().join("absent.toml")),
        ..Default::default()
    });

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_unparsable_config_file_is_error() {
    let file = write_config("database = [1, 2");

    let result = TomlConfig::load(file.path());

    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("Cannot parse config file")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
