//! Core display vocabulary: priorities, message kinds, and prompt force modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered verbosity level gating whether a message is shown.
///
/// A session shows a message only when its priority is at or above the
/// session threshold.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Debug,
    Low,
    Medium,
    #[default]
    High,
    Silent,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::Debug,
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Silent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Silent => "silent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| {
                format!("unknown verbosity `{s}` (expected debug, low, medium, high, or silent)")
            })
    }
}

/// Semantic category of a message, selecting its color.
///
/// Variant order matters: everything from `Warning` through `Success` is
/// treated as non-essential output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisplayType {
    Error,
    Warning,
    Details,
    Hint,
    Message,
    Success,
    Progress,
}

impl DisplayType {
    /// Whether this kind may be dropped in non-essential suppression mode.
    pub fn is_non_essential(self) -> bool {
        self >= Self::Warning && self <= Self::Success
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Details => "details",
            Self::Hint => "hint",
            Self::Message => "message",
            Self::Success => "success",
            Self::Progress => "progress",
        }
    }
}

impl FromStr for DisplayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "details" => Ok(Self::Details),
            "hint" => Ok(Self::Hint),
            "message" => Ok(Self::Message),
            "success" => Ok(Self::Success),
            "progress" => Ok(Self::Progress),
            _ => Err(format!("unknown message kind `{s}`")),
        }
    }
}

/// Whether a prompt blocks on input or answers itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForcePrompt {
    #[default]
    DontForce,
    ForceYes,
    ForceNo,
}
