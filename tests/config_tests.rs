use std::fs;

use pbgui::error::{ConfigError, Error};
use pbgui::infrastructure::{AppConfig, Console};
use pbgui::port::inbound::ConsolePort;
use pbgui::port::outbound::SettingsStore;

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.settings_file, "pbgui.toml");
    assert_eq!(config.navigation.dashboard, "dashboards");
    assert_eq!(config.coin_data.timeout_secs, 10);
}

#[test]
fn config_file_sections_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
data_dir = "/var/lib/pbgui"

[logging]
level = "debug"
format = "json"

[coin_data]
api_url = "http://127.0.0.1:9"
timeout_secs = 2
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.data_dir, "/var/lib/pbgui");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.coin_data.timeout().as_secs(), 2);
}

#[test]
fn invalid_values_are_rejected_by_field() {
    let err = AppConfig::parse_toml("[coin_data]\ntimeout_secs = 0\n").unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "coin_data.timeout_secs",
            ..
        })
    ));

    let err = AppConfig::parse_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        })
    ));

    let err = AppConfig::parse_toml("data_dir = [").unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn overrides_replace_store_paths() {
    let mut config = AppConfig::default();
    config.apply_overrides(|key| match key {
        "PBGUI_SETTINGS_FILE" => Some("/etc/pbgui/pbgui.toml".into()),
        "PBGUI_SECRETS_FILE" => Some("  ".into()),
        _ => None,
    });

    assert_eq!(config.settings_file, "/etc/pbgui/pbgui.toml");
    assert_eq!(config.secrets_file, ".pbgui/secrets.toml");
}

#[test]
fn console_resolves_stores_against_its_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    let console = Console::with_base_dir(AppConfig::default(), dir.path(), "trader-box").unwrap();

    console.settings().set("main", "pbname", "node1").unwrap();

    let written = fs::read_to_string(dir.path().join("pbgui.toml")).unwrap();
    assert!(written.contains("[main]"));
    assert!(written.contains("pbname = \"node1\""));
    assert_eq!(console.base_dir(), dir.path());
}
