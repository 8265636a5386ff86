use std::path::PathBuf;
use tempfile::tempdir;
use turtlekit_core::Color;
use turtlekit_settings::{Config, SettingsError};

fn customised() -> Config {
    let mut config = Config::default();
    config.session.length = 75.5;
    config.session.sides = 9;
    config.session.speed = 8;
    config.canvas.width = 1280.0;
    config.canvas.height = 720.0;
    config.canvas.background = Color::YELLOW;
    config.view.scale = 1.5;
    config.view.pan_x = -40.0;
    config.output.svg_path = PathBuf::from("out/drawing.svg");
    config
}

#[test]
fn test_toml_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let config = customised();

    config.save_to_file(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[session]"));
    assert!(content.contains("#ffff00"));

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_json_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = customised();

    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[session]\nspeed = 0\n").unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::InvalidSetting { key, .. }) if key == "session.speed"
    ));
}

#[test]
fn test_invalid_config_is_not_saved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::default();
    config.session.length = 0.0;

    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_malformed_and_missing_files() {
    let dir = tempdir().unwrap();

    let json = dir.path().join("broken.json");
    std::fs::write(&json, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&json),
        Err(SettingsError::Json(_))
    ));

    let toml = dir.path().join("broken.toml");
    std::fs::write(&toml, "session = [").unwrap();
    assert!(matches!(
        Config::load_from_file(&toml),
        Err(SettingsError::TomlDe(_))
    ));

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        Config::load_from_file(&missing),
        Err(SettingsError::LoadError(_))
    ));

    let yaml = dir.path().join("config.yaml");
    assert!(matches!(
        Config::default().save_to_file(&yaml),
        Err(SettingsError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_non_hex_background_is_a_parse_error() {
    let dir = tempdir().unwrap();

    let toml = dir.path().join("config.toml");
    std::fs::write(&toml, "[canvas]\nbackground = \"#a\u{e9}bcd\"\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&toml),
        Err(SettingsError::TomlDe(_))
    ));

    let json = dir.path().join("config.json");
    std::fs::write(&json, "{\"canvas\": {\"background\": \"#a\u{e9}bcd\"}}").unwrap();
    assert!(matches!(
        Config::load_from_file(&json),
        Err(SettingsError::Json(_))
    ));
}
