use playdeck::config::{
    AppConfig, AudioQuality, ConfigError, ConfigStore, Persistence, TomlFile,
};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = AppConfig::default();

    assert!(config.player.gapless);
    assert!(config.player.autoplay);
    assert_eq!(config.player.crossfade_seconds, 0);
    assert!(config.player.normalization);
    assert_eq!(config.player.normalization_level_db, -6);
    assert_eq!(config.player.audio_quality, AudioQuality::Normal);
    assert!(!config.player.data_saver);
    assert!(!config.library.show_local_files);
    assert!(config.interface.show_hints);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = AppConfig::config_path();
    assert!(path.ends_with("playdeck/config.toml"));
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[player]\ngapless = false\naudio_quality = \"very_high\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert!(!config.player.gapless);
    assert!(config.player.autoplay);
    assert_eq!(config.player.audio_quality, AudioQuality::VeryHigh);
    assert!(config.interface.show_hints);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[player\ngapless = ").unwrap();

    let result = AppConfig::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_out_of_range_values_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[player]\nnormalization_level_db = 3\n").unwrap();

    let result = AppConfig::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.player.crossfade_seconds = 7;
    config.player.data_saver = true;
    config.player.audio_quality = AudioQuality::Low;
    config.save_to(&path).unwrap();

    assert!(!dir.path().join("nested").join("config.toml.tmp").exists());
    assert_eq!(AppConfig::load_from(&path).unwrap(), config);
}

#[tokio::test]
async fn test_store_persists_through_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let persistence: Arc<dyn Persistence> = Arc::new(TomlFile::new(path.clone()));

    let store = ConfigStore::open(persistence.clone()).unwrap();
    store
        .update(Box::new(|mut c| {
            c.library.hide_explicit = true;
            c
        }))
        .await
        .unwrap();

    let reopened = ConfigStore::open(persistence).unwrap();
    assert!(reopened.current().library.hide_explicit);
    assert!(AppConfig::load_from(&path).unwrap().library.hide_explicit);
}

#[test]
fn test_open_rejects_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[player]\ncrossfade_seconds = 30\n").unwrap();

    let result = ConfigStore::open(Arc::new(TomlFile::new(path)));
    assert!(result.is_err());
}
