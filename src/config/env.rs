//! Environment overrides applied on top of the file configuration.

use crate::display::Priority;
use crate::error::ConfigError;

use super::defaults::{ENV_COLOR, ENV_NO_COLOR, ENV_VERBOSITY};
use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(level) = non_empty(env_lookup, ENV_VERBOSITY) {
        config.display.verbosity = level
            .parse::<Priority>()
            .map_err(|e| ConfigError::Invalid(format!("{ENV_VERBOSITY}: {e}")))?;
    }
    if let Some(value) = non_empty(env_lookup, ENV_COLOR) {
        config.display.color = parse_switch(&value).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_COLOR} value `{value}`: expected true/false, yes/no, on/off, or 1/0"
            ))
        })?;
    }
    // NO_COLOR wins over MARQUEE_COLOR.
    if non_empty(env_lookup, ENV_NO_COLOR).is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
