//! Configuration data model.
//!
//! Struct/enum definitions and their defaults live here. Source discovery and
//! env overrides stay in `loader`/`env` so precedence rules are centralized.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_RESTART_DELAY_MS, DEFAULT_TARGET_BINARY,
    DEFAULT_TARGET_PACKAGE,
};

/// Top-level settings parsed from `waaaybar.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub target: TargetConfig,
    pub network: NetworkConfig,
    pub display: DisplayConfig,
}

/// Directory overrides. Unset entries fall back to the user config dir.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root owned by this tool (themes live under `<root>/themes`).
    pub config_root: Option<String>,
    /// Live config directory of the target application.
    pub live_config: Option<String>,
}

/// The external status-bar application being themed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Executable looked up on PATH and relaunched after applying a theme.
    pub binary: String,
    /// Package name handed to the system package manager.
    pub package: String,
    pub restart_delay_ms: u64,
}

impl TargetConfig {
    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_TARGET_BINARY.to_string(),
            package: DEFAULT_TARGET_PACKAGE.to_string(),
            restart_delay_ms: DEFAULT_RESTART_DELAY_MS,
        }
    }
}

/// Network/HTTP timeout policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Timeout for each theme asset download.
    pub fetch_timeout_secs: u64,
}

impl NetworkConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.max(1))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Config plus the resolved directory layout and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub paths: super::ThemePaths,
    /// Settings file that was read, or `None` when built-in defaults were used.
    pub source: Option<PathBuf>,
}
