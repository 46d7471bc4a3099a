//! Process-wide session over the shared stdout console.
//!
//! Programs that thread no session through their call graph use these free
//! functions. The session is created lazily with default settings.

use std::error::Error;
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::config::DisplayConfig;
use crate::display::{DisplayType, ForcePrompt, Priority, Session};
use crate::error::{ConfigError, PromptError};

static GLOBAL_SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

/// Run `f` against the global session.
pub fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    let session = GLOBAL_SESSION.get_or_init(|| Mutex::new(Session::stdout()));
    let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

pub fn configure(config: &DisplayConfig) -> Result<(), ConfigError> {
    with_session(|session| session.apply_config(config))
}

pub fn set_verbosity(verbosity: Priority) {
    with_session(|session| session.set_verbosity(verbosity));
}

pub fn suppressed_count() -> u64 {
    with_session(|session| session.suppressed_count())
}

pub fn display(category: &str, message: &str, kind: DisplayType, priority: Priority) {
    with_session(|session| session.display(category, message, kind, priority));
}

pub fn message(category: &str, message: &str) {
    with_session(|session| session.message(category, message));
}

pub fn display_error(category: &str, err: &(dyn Error + 'static)) {
    with_session(|session| session.display_error(category, err));
}

pub fn display_warning(category: &str, err: &(dyn Error + 'static)) {
    with_session(|session| session.display_warning(category, err));
}

pub fn display_tip() {
    with_session(Session::display_tip);
}

pub fn prompt(force: ForcePrompt, question: &str) -> Result<bool, PromptError> {
    with_session(|session| session.prompt(force, question))
}

pub fn prompt_custom(
    force: ForcePrompt,
    question: &str,
    default: &str,
) -> Result<String, PromptError> {
    with_session(|session| session.prompt_custom(force, question, default))
}

pub fn prompt_list<S: AsRef<str>>(
    force: ForcePrompt,
    question: &str,
    options: &[S],
) -> Result<Option<String>, PromptError> {
    with_session(|session| session.prompt_list(force, question, options))
}
