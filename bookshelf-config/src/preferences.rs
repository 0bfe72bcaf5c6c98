//! Persistence of the one user preference the browser keeps: the theme.

use bookshelf_model::Theme;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::loader::error::ConfigLoadError;

const APP_DIR: &str = "bookshelf";
const FILE_NAME: &str = "preferences.json";

#[derive(Debug, Default, Deserialize, Serialize)]
struct StoredPreferences {
    theme: Option<Theme>,
}

/// Key-value file holding the `theme` preference.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/bookshelf/preferences.json`.
    pub fn default_location() -> Result<Self, ConfigLoadError> {
        dirs::config_dir()
            .map(|dir| Self::at(dir.join(APP_DIR).join(FILE_NAME)))
            .ok_or(ConfigLoadError::NoPreferencesDir)
    }

    /// Explicit path if configured, the platform location otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        match path {
            Some(path) => Ok(Self::at(path)),
            None => Self::default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored theme, or the default day theme when nothing usable is
    /// stored.
    pub fn stored_theme(&self) -> Theme {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!(
                    "No stored preferences at {}: {}",
                    self.path.display(),
                    err
                );
                return Theme::default();
            }
        };

        match serde_json::from_str::<StoredPreferences>(&contents) {
            Ok(stored) => stored.theme.unwrap_or_default(),
            Err(err) => {
                warn!(
                    "Ignoring unreadable preferences {}: {}",
                    self.path.display(),
                    err
                );
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), ConfigLoadError> {
        let io_err = |source| ConfigLoadError::PreferencesIo {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(&StoredPreferences {
            theme: Some(theme),
        })
        .map_err(ConfigLoadError::PreferencesEncode)?;
        fs::write(&self.path, content).map_err(io_err)?;

        debug!("Stored theme {} in {}", theme, self.path.display());
        Ok(())
    }
}
