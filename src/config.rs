// Configuration for the formula editor and its suggestion lookups.
// Every field has a default; a TOML file only needs the keys it changes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://652f91320b8d8ddac0b2b62b.mockapi.io/autocomplete";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Suggestion lookup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// GET endpoint returning a JSON array of suggestions
    pub endpoint: String,

    /// Query-string parameter used to forward the query (none: fetch everything)
    pub query_param: Option<String>,

    /// Local JSON file used instead of the endpoint
    pub fixture: Option<PathBuf>,

    pub request_timeout_ms: u64,

    /// Freshness of the unfiltered list (default 5 minutes)
    pub full_list_ttl_secs: u64,

    /// Freshness of filtered queries (default 60 seconds)
    pub query_ttl_secs: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query_param: None,
            fixture: None,
            request_timeout_ms: 10_000,
            full_list_ttl_secs: 300,
            query_ttl_secs: 60,
        }
    }
}

impl SuggestConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn full_list_ttl(&self) -> Duration {
        Duration::from_secs(self.full_list_ttl_secs)
    }

    pub fn query_ttl(&self) -> Duration {
        Duration::from_secs(self.query_ttl_secs)
    }
}

/// Input controller settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Quiet period after typing before a filtered lookup fires
    pub debounce_ms: u64,

    /// Rows of the suggestion dropdown
    pub max_visible_suggestions: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            max_visible_suggestions: 8,
        }
    }
}

impl EditorConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub suggest: SuggestConfig,
    pub editor: EditorConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.suggest.full_list_ttl(), Duration::from_secs(300));
        assert_eq!(config.suggest.query_ttl(), Duration::from_secs(60));
        assert_eq!(config.editor.debounce(), Duration::from_millis(300));
        assert_eq!(config.suggest.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[editor]\ndebounce_ms = 150").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.editor.debounce_ms, 150);
        assert_eq!(config.editor.max_visible_suggestions, 8);
        assert_eq!(config.suggest, SuggestConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load(Path::new("/nonexistent/tagformula.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[editor\ndebounce_ms = ").unwrap();
        let result = Config::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
