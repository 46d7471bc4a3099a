//! Default configuration constants.

/// File name looked up locally and under the per-user config root.
pub(super) const CONFIG_FILE_NAME: &str = "marquee.toml";
/// Directory under the config root holding the per-user file.
pub(super) const CONFIG_DIR_NAME: &str = "marquee";
pub(super) const DEFAULT_COLOR: bool = true;
pub(super) const DEFAULT_SUPPRESS_NON_ESSENTIAL: bool = false;

pub(super) const ENV_VERBOSITY: &str = "MARQUEE_VERBOSITY";
pub(super) const ENV_COLOR: &str = "MARQUEE_COLOR";
/// Community convention: any non-empty value disables color.
pub(super) const ENV_NO_COLOR: &str = "NO_COLOR";
