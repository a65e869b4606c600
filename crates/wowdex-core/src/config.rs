//! Configuration for paths and search limits.
//!
//! Configuration is stored in TOML and is entirely optional: a missing file
//! yields the defaults. The mapping files themselves are separate YAML
//! sources named by [`crate::MappingSources`]; this config only says where to
//! find them and how many suggestions a search may return.
//!
//! ## Example configuration file
//!
//! ```toml
//! [paths]
//! mappings_dir = "/srv/wowdex/mappings"
//!
//! [search]
//! max_suggestions = 25
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::DEFAULT_SUGGESTION_LIMIT;
use crate::loader::MappingSources;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system paths configuration.
    pub paths: PathsConfig,
    /// Search behavior configuration.
    pub search: SearchConfig,
}

/// File system paths configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the four mapping files.
    ///
    /// Defaults to `mappings` relative to the working directory.
    pub mappings_dir: PathBuf,
}

/// Search behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Cap on suggestions returned per search.
    pub max_suggestions: usize,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            mappings_dir: PathBuf::from("mappings"),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Config {
    /// Load from the platform config directory, or fall back to defaults if
    /// no config file exists there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| {
            Error::Config(format!("cannot read '{}': {err}", path.display()))
        })?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }

    /// Platform-specific default config file location
    /// (e.g. `~/.config/wowdex/config.toml` on Linux).
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "wowdex", "wowdex")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Mapping file paths under the configured directory.
    #[must_use]
    pub fn sources(&self) -> MappingSources {
        MappingSources::from_dir(&self.paths.mappings_dir)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.paths.mappings_dir, PathBuf::from("mappings"));
        assert_eq!(config.search.max_suggestions, DEFAULT_SUGGESTION_LIMIT);
    }

    #[test]
    fn test_load_from_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"[search]\nmax_suggestions = 10\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.search.max_suggestions, 10);
        assert_eq!(config.paths.mappings_dir, PathBuf::from("mappings"));
    }

    #[test]
    fn test_load_from_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"[search\nmax_suggestions = ").unwrap();

        let error = Config::load_from(&path).unwrap_err();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let error = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert_eq!(error.category(), "config");
    }

    #[test]
    fn test_sources_use_conventional_names() {
        let config = Config::default();
        let sources = config.sources();
        assert!(sources.guides.ends_with("guides.yaml"));
        assert!(sources.routes.ends_with("mplus-routes.yaml"));
        assert!(sources.aux.ends_with("murloc.yaml"));
        assert!(sources.raid.ends_with("raid.yaml"));
    }
}
