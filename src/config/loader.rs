//! Top-level config loading pipeline.
//!
//! Precedence (highest wins):
//! 1. `WAAAYBAR_*` environment variables
//! 2. File passed via `--config`
//! 3. `<config_root>/waaaybar.toml`
//! 4. Built-in defaults
//!
//! Loading never writes to disk: first-run detection depends on the config
//! root staying absent until bootstrap creates it.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{APP_DIR_NAME, LIVE_CONFIG_DIR_NAME, SETTINGS_FILE_NAME};
use super::env::{apply_env_overrides, non_empty, ENV_CONFIG_ROOT};
use super::paths::{expand_home, user_config_dir};
use super::{Config, LoadedConfig, PathsConfig, ThemePaths};

/// Load settings from disk and environment, then resolve the directory layout.
///
/// `path_override` is an explicit settings path (from `--config`); unlike the
/// default location it must exist.
pub fn load_config(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        user_config_dir,
        dirs::home_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FDir, FHome>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    user_dir: FDir,
    home_dir: FHome,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FDir: Fn() -> Option<PathBuf>,
    FHome: Fn() -> Option<PathBuf>,
{
    let home = home_dir();
    let user_dir = user_dir();

    // The env root may relocate where the settings file itself is found.
    let default_root = non_empty(&env_lookup, ENV_CONFIG_ROOT)
        .map(|raw| expand_home(&raw, home.as_deref()))
        .or_else(|| user_dir.as_ref().map(|dir| dir.join(APP_DIR_NAME)));

    let (text, source) = read_settings_text(path_override, default_root.as_deref(), &read_file)?;
    let mut config: Config = toml::from_str(&text)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    let paths = resolve_paths(&config.paths, user_dir.as_deref(), home.as_deref())?;

    Ok(LoadedConfig {
        config,
        paths,
        source,
    })
}

fn read_settings_text<FRead>(
    path_override: Option<&str>,
    default_root: Option<&Path>,
    read_file: &FRead,
) -> Result<(String, Option<PathBuf>), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, io::Error>,
{
    if let Some(raw) = path_override {
        let path = PathBuf::from(raw);
        let text = read_file(&path)?;
        return Ok((text, Some(path)));
    }

    if let Some(root) = default_root {
        let path = root.join(SETTINGS_FILE_NAME);
        match read_file(&path) {
            Ok(text) => return Ok((text, Some(path))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
    }

    Ok((String::new(), None))
}

fn resolve_paths(
    paths: &PathsConfig,
    user_dir: Option<&Path>,
    home: Option<&Path>,
) -> Result<ThemePaths, ConfigError> {
    let resolve = |configured: &Option<String>, default_name: &str, key: &str| {
        match configured {
            Some(raw) => Ok(expand_home(raw, home)),
            None => user_dir.map(|dir| dir.join(default_name)).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "unable to resolve the user config directory; set paths.{key}"
                ))
            }),
        }
    };
    let config_root = resolve(&paths.config_root, APP_DIR_NAME, "config_root")?;
    let live_config = resolve(&paths.live_config, LIVE_CONFIG_DIR_NAME, "live_config")?;

    // Applying a theme deletes the live config, so neither tree may contain the other.
    if config_root.starts_with(&live_config) || live_config.starts_with(&config_root) {
        return Err(ConfigError::Invalid(format!(
            "paths.config_root ({}) and paths.live_config ({}) must not overlap",
            config_root.display(),
            live_config.display()
        )));
    }

    Ok(ThemePaths::new(config_root, live_config))
}
