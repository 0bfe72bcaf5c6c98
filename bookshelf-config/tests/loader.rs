use std::fs;
use std::sync::Mutex;

use bookshelf_config::{BrowseConfigSource, ConfigLoadError, ConfigLoader};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Drop config variables a developer shell may already export; they would
/// outrank anything the env file provides.
fn clear_host_overrides() {
    for key in ["BOOKSHELF_CONFIG_PATH", "BOOKSHELF_CONFIG_JSON"] {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn explicit_env_file_feeds_inline_config() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_host_overrides();

    let dir = tempfile::tempdir().unwrap();
    let env_path = dir.path().join("bookshelf.env");
    fs::write(
        &env_path,
        "BOOKSHELF_CONFIG_JSON='{\"page_size\": 4, \"data_path\": \"/data/books.json\"}'\n",
    )
    .unwrap();

    let load = ConfigLoader::new()
        .with_env_file(Some(env_path))
        .with_base_dir(dir.path())
        .load();
    clear_host_overrides();
    let load = load.unwrap();

    assert_eq!(load.source, BrowseConfigSource::EnvInline);
    assert_eq!(load.config.page_size, 4);
    assert_eq!(
        load.config.data_path.as_deref(),
        Some(std::path::Path::new("/data/books.json"))
    );
}

#[test]
fn missing_explicit_env_file_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigLoader::new()
        .with_env_file(Some(dir.path().join("absent.env")))
        .with_base_dir(dir.path())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::EnvFile(_)));
}
