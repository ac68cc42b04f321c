//! Configuration loading from `waaaybar.toml` and environment variables.
//!
//! See [`loader`] for the precedence rules. The resolved [`ThemePaths`] is
//! built once here and handed to every theme lifecycle component.

mod defaults;
mod env;
mod loader;
mod paths;
mod types;

pub use loader::load_config;
pub use paths::{user_config_dir, ThemePaths};
pub use types::{Config, DisplayConfig, LoadedConfig, NetworkConfig, PathsConfig, TargetConfig};
