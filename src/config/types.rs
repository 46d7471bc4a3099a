//! Configuration data model.
//!
//! Plain serde structs with field-level defaults; discovery and env
//! overrides live in the sibling modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::display::Priority;
use crate::error::ConfigError;
use crate::tui::line::SpinnerFrames;

use super::defaults::{DEFAULT_COLOR, DEFAULT_SUPPRESS_NON_ESSENTIAL};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
}

/// `[display]` table: how a session filters and styles its output.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Minimum priority that is shown.
    pub verbosity: Priority,
    /// Styled labels and placeholder spinners.
    pub color: bool,
    /// Collapse non-essential lines to a single marker at `high` verbosity.
    pub suppress_non_essential: bool,
    /// Custom spinner glyphs; must hold exactly eight entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spinner_frames: Option<Vec<String>>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            verbosity: Priority::default(),
            color: DEFAULT_COLOR,
            suppress_non_essential: DEFAULT_SUPPRESS_NON_ESSENTIAL,
            spinner_frames: None,
        }
    }
}

impl DisplayConfig {
    /// Validated custom spinner frame set, if one is configured.
    pub fn spinner(&self) -> Result<Option<SpinnerFrames>, ConfigError> {
        self.spinner_frames
            .as_ref()
            .map(|frames| SpinnerFrames::new(frames.iter().map(String::as_str)))
            .transpose()
    }
}

/// Where the loaded configuration text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given with `--config`.
    Explicit(PathBuf),
    /// `./marquee.toml` in the working directory.
    Local,
    /// Per-user file under the config root.
    Global(PathBuf),
    /// No file found.
    BuiltInDefaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Global(path) => write!(f, "{}", path.display()),
            Self::Local => write!(f, "./{}", super::defaults::CONFIG_FILE_NAME),
            Self::BuiltInDefaults => write!(f, "built-in defaults"),
        }
    }
}

/// Configuration plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
