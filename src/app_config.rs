//! Application configuration for the terminal puzzle.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the terminal puzzle app.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Event poll interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// Show numeric captions on the tiles.
    #[serde(default = "default_show_labels")]
    show_labels: bool,

    /// Scramble the board on startup instead of showing the solved
    /// picture.
    #[serde(default)]
    shuffle_on_start: bool,

    /// Seed for deterministic shuffles; omit to seed from entropy.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_tick_rate_ms() -> u64 {
    200
}

fn default_show_labels() -> bool {
    true
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(tick_rate_ms = config.tick_rate_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the shuffle seed.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Overrides whether the board starts scrambled.
    pub fn set_shuffle_on_start(&mut self, shuffle: bool) {
        self.shuffle_on_start = shuffle;
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_labels: default_show_labels(),
            shuffle_on_start: false,
            seed: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate_ms = 50").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.tick_rate_ms(), 50);
        assert!(*config.show_labels());
        assert!(!*config.shuffle_on_start());
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn seed_and_shuffle_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 42").unwrap();
        writeln!(file, "shuffle_on_start = true").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.seed(), Some(42));
        assert!(*config.shuffle_on_start());
    }

    #[test]
    fn missing_file_reports_error() {
        let result = AppConfig::from_file("no_such_config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = AppConfig::default();
        config.set_seed(Some(7));
        config.set_shuffle_on_start(true);
        assert_eq!(*config.seed(), Some(7));
        assert!(*config.shuffle_on_start());
    }
}
