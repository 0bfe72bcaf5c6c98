use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    ffi::OsStr,
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use crate::loader::error::ConfigLoadError;

/// Books handed out per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Source that produced the browse configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowseConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Host-side browse settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Number of previews rendered per page and per "show more".
    pub page_size: usize,
    /// JSON file holding `books`, `authors` and `genres`. Relative paths in
    /// a config file are resolved against that file's directory.
    pub data_path: Option<PathBuf>,
    /// Where the theme preference is stored. Defaults to the platform
    /// config directory.
    pub preferences_path: Option<PathBuf>,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_path: None,
            preferences_path: None,
        }
    }
}

impl BrowseConfig {
    /// Resolve the browse configuration. Evaluation order:
    /// 1) `$BOOKSHELF_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$BOOKSHELF_CONFIG_JSON` (inline JSON),
    /// 3) a default file in `base_dir`,
    /// 4) defaults if none of the above exist.
    ///
    /// `var` looks up environment variables so callers can inject them.
    pub fn resolve(
        var: impl Fn(&str) -> Option<String>,
        base_dir: &Path,
    ) -> anyhow::Result<(Self, BrowseConfigSource)> {
        if let Some(path_str) = var("BOOKSHELF_CONFIG_PATH")
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, BrowseConfigSource::EnvPath(path)));
        }

        if let Some(raw) = var("BOOKSHELF_CONFIG_JSON")
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .context("failed to parse BOOKSHELF_CONFIG_JSON")?;
            return Ok((parsed, BrowseConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(base_dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, BrowseConfigSource::File(path)));
        }

        Ok((Self::default(), BrowseConfigSource::Default))
    }

    /// Read a config file. `.json` and `.toml` are parsed as such; any other
    /// extension is sniffed from the content. Relative paths inside the file
    /// are anchored to its directory.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read browse config from {}", path.display())
        })?;

        let mut config = match path.extension().and_then(OsStr::to_str) {
            Some("json") => Self::parse_json(&contents),
            Some("toml") => Self::parse_toml(&contents),
            _ => Self::parse_from_str(&contents),
        }
        .with_context(|| format!("invalid browse config {}", path.display()))?;

        if let Some(parent) = path.parent() {
            config.anchor_paths(parent);
        }
        Ok(config)
    }

    /// A document whose first token is `{` is JSON; everything else is TOML.
    pub fn parse_from_str(contents: &str) -> anyhow::Result<Self> {
        if contents.trim_start().starts_with('{') {
            Self::parse_json(contents)
        } else {
            Self::parse_toml(contents)
        }
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    fn parse_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.page_size().map(|_| ())
    }

    pub fn page_size(&self) -> Result<NonZeroUsize, ConfigLoadError> {
        NonZeroUsize::new(self.page_size)
            .ok_or(ConfigLoadError::InvalidPageSize)
    }

    fn anchor_paths(&mut self, base: &Path) {
        for path in [&mut self.data_path, &mut self.preferences_path]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "bookshelf.toml",
            "bookshelf.json",
            "config/bookshelf.toml",
            "config/bookshelf.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.exists())
    }
}
