//! Unified error types for display, prompt, and configuration paths.

use std::error::Error;
use std::fmt;
use std::io;

// ---------------------------------------------------------------------------
// DisplayError
// ---------------------------------------------------------------------------

/// An error carrying a user-facing hint and an optional wrapped cause.
///
/// Rendering walks `Error::source()`, so a `DisplayError` can wrap any other
/// error type (including another `DisplayError`) and every link in the chain
/// shows up as its own details line.
#[derive(Debug)]
pub struct DisplayError {
    message: String,
    hint: String,
    cause: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl DisplayError {
    /// Create an error with a message and no hint.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: String::new(),
            cause: None,
        }
    }

    /// Attach a hint shown after the primary message.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Wrap an underlying cause.
    pub fn with_cause(mut self, cause: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Hint text; empty when none was attached.
    pub fn hint(&self) -> &str {
        &self.hint
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for DisplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Non-empty hint attached to `err`, if it is a `DisplayError`.
pub fn hint_of<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a str> {
    err.downcast_ref::<DisplayError>()
        .map(DisplayError::hint)
        .filter(|hint| !hint.is_empty())
}

// ---------------------------------------------------------------------------
// PromptError
// ---------------------------------------------------------------------------

/// Errors surfaced by interactive prompts.
#[derive(Debug)]
pub enum PromptError {
    /// The user pressed Ctrl-C inside the interactive selector.
    Cancelled,
    /// A list prompt was called with no options.
    NoOptions,
    /// Input ended (or the attempt bound ran out) before an answer was given.
    NoAnswer,
    /// Reading from or writing to the terminal failed.
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "prompt cancelled by user"),
            Self::NoOptions => write!(f, "list prompt requires at least one option"),
            Self::NoAnswer => write!(f, "no answer was provided"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
