//! Environment variable overrides.
//!
//! `WAAAYBAR_*` variables outrank values from the settings file.

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_CONFIG_ROOT: &str = "WAAAYBAR_CONFIG_ROOT";
pub(super) const ENV_LIVE_CONFIG: &str = "WAAAYBAR_LIVE_CONFIG";
pub(super) const ENV_FETCH_TIMEOUT_SECS: &str = "WAAAYBAR_FETCH_TIMEOUT_SECS";

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(root) = non_empty(env_lookup, ENV_CONFIG_ROOT) {
        config.paths.config_root = Some(root);
    }
    if let Some(live) = non_empty(env_lookup, ENV_LIVE_CONFIG) {
        config.paths.live_config = Some(live);
    }
    if let Some(timeout) = non_empty(env_lookup, ENV_FETCH_TIMEOUT_SECS) {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_FETCH_TIMEOUT_SECS} value `{timeout}`: expected whole seconds"
            ))
        })?;
        // Zero would mean "no timeout"; keep a one second floor.
        config.network.fetch_timeout_secs = parsed.max(1);
    }
    Ok(())
}

/// Look up `name`, treating blank values as unset.
pub(super) fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
