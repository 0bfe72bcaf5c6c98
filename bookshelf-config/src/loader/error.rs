use bookshelf_core::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load browse configuration: {0}")]
    Browse(#[source] anyhow::Error),
    #[error("page size must be at least 1")]
    InvalidPageSize,
    #[error("no catalog data file configured (set data_path or pass --data)")]
    MissingDataPath,
    #[error("failed to read catalog data file {path}")]
    DataFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog data file {path}")]
    DataFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog data rejected")]
    Catalog(#[from] CatalogError),
    #[error("failed to write preferences to {path}")]
    PreferencesIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode preferences")]
    PreferencesEncode(#[source] serde_json::Error),
    #[error("no platform config directory available for preferences")]
    NoPreferencesDir,
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
