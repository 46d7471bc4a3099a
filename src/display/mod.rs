//! Priority-filtered status output and interactive prompts.
//!
//! [`Session`] is the entry point: it decides whether a message is shown,
//! keeps the suppression count, and drives the prompts. [`global`] wraps a
//! process-wide session for programs that want free functions.

pub mod global;
pub mod placeholder;
mod prompt;
mod session;
mod types;

pub use placeholder::{placeholder_label, PlaceholderRule, PLACEHOLDER_RULES};
pub use prompt::is_yes;
pub use session::Session;
pub use types::{DisplayType, ForcePrompt, Priority};
