// SPDX-License-Identifier: MPL-2.0
//! Reads user preferences from a `settings.toml` file. The app never writes
//! the file; users edit it by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[submission]` - Simulated submission delay and success probability
//! - `[notifications]` - Toast display durations
//! - `[diagnostics]` - In-memory event buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `RATING_CARD_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use rating_card::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! println!("submit delay: {:?}", config.submit_delay());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning shown when an existing settings file cannot be parsed.
pub const LOAD_WARNING: &str = "Settings could not be read, defaults are used";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Simulated submission settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SubmissionConfig {
    /// Delay before the outcome is known (milliseconds).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: Option<u64>,

    /// Probability of a successful submission (0.0 to 1.0).
    #[serde(default = "default_success_probability")]
    pub success_probability: Option<f64>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            success_probability: default_success_probability(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Success toast duration (seconds).
    #[serde(default = "default_success_secs")]
    pub success_secs: Option<u64>,

    /// Error toast duration (seconds).
    #[serde(default = "default_error_secs")]
    pub error_secs: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            success_secs: default_success_secs(),
            error_secs: default_error_secs(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Effective submission delay, capped at [`MAX_SUBMIT_DELAY_MS`].
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        let ms = self
            .submission
            .delay_ms
            .unwrap_or(DEFAULT_SUBMIT_DELAY_MS)
            .min(MAX_SUBMIT_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Effective success probability, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn success_probability(&self) -> f64 {
        match self.submission.success_probability {
            Some(p) if !p.is_nan() => p.clamp(0.0, 1.0),
            _ => DEFAULT_SUCCESS_PROBABILITY,
        }
    }

    /// Effective success toast duration.
    #[must_use]
    pub fn success_toast_duration(&self) -> Duration {
        toast_secs(self.notifications.success_secs, DEFAULT_SUCCESS_TOAST_SECS)
    }

    /// Effective error toast duration.
    #[must_use]
    pub fn error_toast_duration(&self) -> Duration {
        toast_secs(self.notifications.error_secs, DEFAULT_ERROR_TOAST_SECS)
    }

    /// Number of diagnostic events kept in memory, clamped to
    /// [`MIN_DIAGNOSTICS_BUFFER_CAPACITY`]..=[`MAX_DIAGNOSTICS_BUFFER_CAPACITY`].
    #[must_use]
    pub fn buffer_capacity(&self) -> usize {
        self.diagnostics
            .buffer_capacity
            .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
            .clamp(
                MIN_DIAGNOSTICS_BUFFER_CAPACITY,
                MAX_DIAGNOSTICS_BUFFER_CAPACITY,
            )
    }
}

fn toast_secs(value: Option<u64>, default: u64) -> Duration {
    Duration::from_secs(value.unwrap_or(default).clamp(1, MAX_TOAST_SECS))
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_delay_ms() -> Option<u64> {
    Some(DEFAULT_SUBMIT_DELAY_MS)
}

fn default_success_probability() -> Option<f64> {
    Some(DEFAULT_SUCCESS_PROBABILITY)
}

fn default_success_secs() -> Option<u64> {
    Some(DEFAULT_SUCCESS_TOAST_SECS)
}

fn default_error_secs() -> Option<u64> {
    Some(DEFAULT_ERROR_TOAST_SECS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    eprintln!("[WARN] Failed to load config {}: {err}", path.display());
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
