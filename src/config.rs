// Mon Oct 19 2026 - Alex

use crate::image::filter::default_blacklist;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub entry_blacklist: Vec<String>,
    pub parallel: bool,
    pub max_threads: usize,
    pub json_output: bool,
    pub use_color: bool,
    pub pause_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_blacklist: default_blacklist(),
            parallel: true,
            max_threads: num_cpus::get(),
            json_output: false,
            use_color: true,
            pause_on_exit: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.use_color = color;
        self
    }

    pub fn with_pause_on_exit(mut self, pause: bool) -> Self {
        self.pause_on_exit = pause;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_threads == 0 {
            return Err(ConfigError::Invalid("max_threads must be greater than 0".to_string()));
        }
        if self.entry_blacklist.iter().any(|suffix| suffix.is_empty()) {
            return Err(ConfigError::Invalid("entry_blacklist must not contain empty suffixes".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.entry_blacklist, vec!["/", ".txt", ".ini", ".bat", ".exe"]);
        assert!(config.parallel);
        assert!(config.max_threads >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(Config::new().with_max_threads(0).validate().is_err());

        let mut config = Config::new();
        config.entry_blacklist.push(String::new());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smu-checker.json");
        std::fs::write(&path, r#"{ "entry_blacklist": [".pdf"], "parallel": false }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.entry_blacklist, vec![".pdf"]);
        assert!(!config.parallel);
        assert!(config.use_color);
        assert!(!config.json_output);
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();

        assert!(matches!(Config::from_file(&bad), Err(ConfigError::Parse(_))));
        assert!(matches!(Config::from_file(dir.path().join("missing.json")), Err(ConfigError::Io(_))));
    }
}
