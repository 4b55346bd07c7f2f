use fliplearn_config::Config;

use crate::profile::{config_path, load_config, write_config};

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = load_config(None, Some(dir.path())).unwrap();
    assert_eq!(config.storage.data_dir.as_path(), dir.path());
    assert!(!config.storage.key.is_empty());
}

#[test]
fn test_config_file_in_data_dir_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::new();
    config.translator.to_lang = "de".to_string();
    config.storage.key = "decks".to_string();
    write_config(&config_path(dir.path()), &config).unwrap();

    let loaded = load_config(None, Some(dir.path())).unwrap();
    assert_eq!(loaded.translator.to_lang, "de");
    assert_eq!(loaded.storage.key, "decks");
    assert_eq!(loaded.storage.data_dir.as_path(), dir.path());
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    assert!(load_config(Some(missing.as_path()), None).is_err());
}

#[test]
fn test_unparsable_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ nope").unwrap();

    assert!(load_config(Some(path.as_path()), None).is_err());
}
