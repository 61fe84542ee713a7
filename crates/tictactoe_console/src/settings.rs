//! User settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Preferences for a play session.
///
/// Every field has a default, so a partial (or missing) file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Show emoji banners on win and draw.
    #[serde(default = "default_banners")]
    banners: bool,

    /// Ask "Play again?" after each game; when false the session ends
    /// after one game.
    #[serde(default = "default_ask_play_again")]
    ask_play_again: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_banners() -> bool {
    true
}

#[instrument]
fn default_ask_play_again() -> bool {
    true
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            banners: default_banners(),
            ask_play_again: default_ask_play_again(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        debug!(?settings, "Settings parsed");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    ///
    /// Runs before any subscriber exists, so the returned source is what
    /// gets logged once logging is up.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<(Self, SettingsSource), ConfigError> {
        if path.exists() {
            let settings = Self::from_file(path)?;
            Ok((settings, SettingsSource::File(path.to_path_buf())))
        } else {
            Ok((Self::default(), SettingsSource::Defaults))
        }
    }

    /// Overrides the banner preference.
    pub fn with_banners(mut self, banners: bool) -> Self {
        self.banners = banners;
        self
    }

    /// Overrides the play-again preference.
    pub fn with_ask_play_again(mut self, ask_play_again: bool) -> Self {
        self.ask_play_again = ask_play_again;
        self
    }
}

/// Where a [`Settings`] value came from.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SettingsSource {
    /// Parsed from this file.
    #[display("{}", _0.display())]
    File(PathBuf),
    /// No file; built-in defaults.
    #[display("defaults")]
    Defaults,
}

/// Settings error with location tracking.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
