//! Tests for the TOML settings store.

use tempfile::TempDir;

use calcu_later::{Configuration, HintPreferences, Operator, Settings, SettingsStore};

/// Creates an empty temporary directory and the settings path inside it.
/// The directory handle must stay in scope to keep the files alive.
fn setup_store_dir() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("settings.toml");
    (dir, path)
}

#[test]
fn test_missing_file_loads_defaults() {
    let (_dir, path) = setup_store_dir();
    let store = SettingsStore::load(&path).expect("Load failed");
    assert_eq!(*store.settings(), Settings::default());
    assert_eq!(*store.revision(), 0);
    assert!(!path.exists(), "Loading must not create the file");
}

#[test]
fn test_update_saves_and_bumps_revision() {
    let (_dir, path) = setup_store_dir();
    let mut store = SettingsStore::load(&path).expect("Load failed");

    let changed = store
        .update(|settings| settings.hints.multi_layer = false)
        .expect("Update failed");
    assert!(changed);
    assert_eq!(*store.revision(), 1);
    assert!(path.exists());

    let reloaded = SettingsStore::load(&path).expect("Reload failed");
    assert!(!reloaded.settings().hints.multi_layer);
    assert!(reloaded.settings().hints.show_answer);
}

#[test]
fn test_unchanged_update_is_not_saved() {
    let (_dir, path) = setup_store_dir();
    let mut store = SettingsStore::load(&path).expect("Load failed");

    let changed = store
        .update(|settings| settings.hints.standard = true)
        .expect("Update failed");
    assert!(!changed);
    assert_eq!(*store.revision(), 0);
    assert!(!path.exists());
}

#[test]
fn test_generation_settings_survive_reload() {
    let (_dir, path) = setup_store_dir();
    let mut store = SettingsStore::load(&path).expect("Load failed");
    let configuration = Configuration::new(
        3,
        1,
        true,
        [Operator::Multiplication, Operator::Division],
    );

    store
        .update(|settings| settings.generation = configuration.clone())
        .expect("Update failed");

    let reloaded = SettingsStore::load(&path).expect("Reload failed");
    assert_eq!(reloaded.settings().generation, configuration);
    assert_eq!(reloaded.settings().hints, HintPreferences::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = setup_store_dir();
    std::fs::write(&path, "[hints]\nshow_answer = false\n").expect("Write failed");

    let store = SettingsStore::load(&path).expect("Load failed");
    assert!(!store.settings().hints.show_answer);
    assert!(store.settings().hints.standard);
    assert_eq!(store.settings().generation, Configuration::default());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let (_dir, path) = setup_store_dir();
    std::fs::write(&path, "generation = [not toml").expect("Write failed");

    let result = SettingsStore::load(&path);
    assert!(result.is_err(), "Malformed settings should fail to load");
    let err = result.unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("calcu").join("settings.toml");
    let mut store = SettingsStore::load(&path).expect("Load failed");

    store
        .update(|settings| settings.generation = settings.generation.clone().with_digits_operand1(4))
        .expect("Update failed");
    assert!(path.exists());
}
