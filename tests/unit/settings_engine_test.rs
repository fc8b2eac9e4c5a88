//! Unit tests for the SettingsEngine public API, using temp-file config
//! paths so nothing touches the real per-user directories.

use linkshort::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use linkshort::types::settings::{AppSettings, ThemeMode};
use linkshort::types::shorten::ShortenService;

fn temp_config_path() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    (dir, path)
}

#[test]
fn test_missing_file_yields_defaults() {
    let (_dir, path) = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load().unwrap();
    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.general.service, ShortenService::IsGd);
    assert_eq!(settings.appearance.theme, ThemeMode::System);
}

#[test]
fn test_theme_persists_across_engines() {
    let (_dir, path) = temp_config_path();

    let mut engine = SettingsEngine::new(Some(path.clone()));
    engine.load().unwrap();
    engine
        .set_value("appearance.theme", serde_json::json!("light"))
        .unwrap();

    let mut engine2 = SettingsEngine::new(Some(path));
    let loaded = engine2.load().unwrap();
    assert_eq!(loaded.appearance.theme, ThemeMode::Light);
}

#[test]
fn test_service_default_persists() {
    let (_dir, path) = temp_config_path();

    let mut engine = SettingsEngine::new(Some(path.clone()));
    engine.load().unwrap();
    engine
        .set_value("general.service", serde_json::json!("v.gd"))
        .unwrap();

    let mut engine2 = SettingsEngine::new(Some(path));
    assert_eq!(
        engine2.load().unwrap().general.service,
        ShortenService::VGd
    );
}

#[test]
fn test_get_value_matches_settings() {
    let (_dir, path) = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load().unwrap();

    assert_eq!(
        engine.get_value("general.show_qr").unwrap(),
        serde_json::json!(true)
    );
    assert_eq!(
        engine.get_value("appearance.theme").unwrap(),
        serde_json::json!("system")
    );
}

#[test]
fn test_invalid_keys_and_values_are_rejected() {
    let (_dir, path) = temp_config_path();
    let mut engine = SettingsEngine::new(Some(path));
    engine.load().unwrap();

    assert!(engine.get_value("no.such.key").is_err());
    assert!(engine
        .set_value("no.such.key", serde_json::json!(1))
        .is_err());
    assert!(engine
        .set_value("general.log_stats", serde_json::json!("maybe"))
        .is_err());
    assert!(engine
        .set_value("appearance.theme", serde_json::json!("solarized"))
        .is_err());

    // A failed set leaves the settings untouched
    assert_eq!(*engine.get_settings(), AppSettings::default());
}

#[test]
fn test_reset_reverts_and_persists() {
    let (_dir, path) = temp_config_path();

    let mut engine = SettingsEngine::new(Some(path.clone()));
    engine.load().unwrap();
    engine
        .set_value("general.log_stats", serde_json::json!(true))
        .unwrap();
    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), AppSettings::default());

    let mut engine2 = SettingsEngine::new(Some(path));
    assert_eq!(engine2.load().unwrap(), AppSettings::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_dir, path) = temp_config_path();
    std::fs::write(&path, "{ not json ").unwrap();

    let mut engine = SettingsEngine::new(Some(path));
    assert!(engine.load().is_err());
}
