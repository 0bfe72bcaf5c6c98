pub mod error;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::browse::{BrowseConfig, BrowseConfigSource};
use error::ConfigLoadError;

/// Result of a successful configuration load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: BrowseConfig,
    pub source: BrowseConfigSource,
}

/// Loads `.env`, then resolves and validates the browse configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    env_file: Option<PathBuf>,
    base_dir: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            env_file: None,
            base_dir: PathBuf::from("."),
        }
    }

    /// Read this env file instead of looking for `.env`. Unlike the
    /// implicit lookup, a missing explicit file is an error.
    pub fn with_env_file(mut self, path: Option<PathBuf>) -> Self {
        self.env_file = path;
        self
    }

    /// Directory searched for default config files.
    pub fn with_base_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.base_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        self.load_env_file()?;

        let (config, source) = BrowseConfig::resolve(
            |key| std::env::var(key).ok(),
            &self.base_dir,
        )
        .map_err(ConfigLoadError::Browse)?;
        config.validate()?;

        info!(
            "Browse configuration loaded from {:?}: page size {}",
            source, config.page_size
        );
        Ok(ConfigLoad { config, source })
    }

    fn load_env_file(&self) -> Result<(), ConfigLoadError> {
        match &self.env_file {
            Some(path) => {
                dotenvy::from_path(path)?;
                debug!("Loaded environment from {}", path.display());
            }
            None => match dotenvy::dotenv() {
                Ok(path) => {
                    debug!("Loaded environment from {}", path.display())
                }
                Err(err) if err.not_found() => {}
                Err(err) => return Err(err.into()),
            },
        }
        Ok(())
    }
}
