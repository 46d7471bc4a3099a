//! Display session: verbosity gating, warning dedup, and suppression accounting.

use crate::config::DisplayConfig;
use crate::display::placeholder::placeholder_label;
use crate::display::{DisplayType, Priority};
use crate::error::{hint_of, ConfigError};
use crate::tui::console::{self, Console, LineOptions, SharedConsole};
use crate::tui::settings::{LABEL_CONTINUATION, LABEL_HINT, LABEL_WARNING};
use std::collections::HashSet;
use std::error::Error;

/// Stateful front end for priority-filtered status output.
///
/// A session owns its verbosity threshold, suppression counter, and the set
/// of warnings already shown. The terminal and its progress-line state are
/// shared through the [`SharedConsole`] it was created with.
pub struct Session {
    verbosity: Priority,
    color: bool,
    suppress_non_essential: bool,
    suppressed: u64,
    seen_warnings: HashSet<(String, String)>,
    console: SharedConsole,
}

impl Session {
    /// Session with default settings: `High` threshold, color on.
    pub fn new(console: SharedConsole) -> Self {
        Self {
            verbosity: Priority::default(),
            color: true,
            suppress_non_essential: false,
            suppressed: 0,
            seen_warnings: HashSet::new(),
            console,
        }
    }

    /// Session on the process-wide stdout console.
    pub fn stdout() -> Self {
        Self::new(Console::shared())
    }

    /// Session configured from a `[display]` table.
    ///
    /// A custom spinner frame set is installed on the shared console.
    pub fn from_config(config: &DisplayConfig, console: SharedConsole) -> Result<Self, ConfigError> {
        let mut session = Self::new(console);
        session.apply_config(config)?;
        Ok(session)
    }

    /// Apply verbosity, color, suppression, and spinner settings.
    pub fn apply_config(&mut self, config: &DisplayConfig) -> Result<(), ConfigError> {
        if let Some(frames) = config.spinner()? {
            console::lock(&self.console).set_spinner_frames(frames);
        }
        self.verbosity = config.verbosity;
        self.color = config.color;
        self.suppress_non_essential = config.suppress_non_essential;
        Ok(())
    }

    pub fn verbosity(&self) -> Priority {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: Priority) {
        self.verbosity = verbosity;
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn suppress_non_essential(&self) -> bool {
        self.suppress_non_essential
    }

    pub fn set_suppress_non_essential(&mut self, suppress: bool) {
        self.suppress_non_essential = suppress;
    }

    /// Number of non-debug messages hidden by the verbosity threshold.
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed
    }

    pub fn console(&self) -> &SharedConsole {
        &self.console
    }

    /// Show `message` under `category` if `priority` clears the threshold.
    ///
    /// Repeated warnings with the same category and message are shown once.
    /// Multi-line messages are split, empty lines dropped, and every line
    /// after the first is labeled with the continuation marker.
    pub fn display(&mut self, category: &str, message: &str, kind: DisplayType, priority: Priority) {
        if kind == DisplayType::Warning && !self.remember_warning(category, message) {
            return;
        }
        self.show(category, message, kind, priority);
    }

    /// `display` with the default kind and priority (`Message`, `Medium`).
    pub fn message(&mut self, category: &str, message: &str) {
        self.display(category, message, DisplayType::Message, Priority::Medium);
    }

    pub fn success(&mut self, category: &str, message: &str) {
        self.display(category, message, DisplayType::Success, Priority::High);
    }

    pub fn progress(&mut self, category: &str, message: &str) {
        self.display(category, message, DisplayType::Progress, Priority::Medium);
    }

    pub fn details(&mut self, category: &str, message: &str) {
        self.display(category, message, DisplayType::Details, Priority::Low);
    }

    pub fn hint(&mut self, category: &str, message: &str) {
        self.display(category, message, DisplayType::Hint, Priority::Medium);
    }

    pub fn debug(&mut self, category: &str, message: &str) {
        self.display(category, message, DisplayType::Message, Priority::Debug);
    }

    pub fn warning(&mut self, category: &str, message: &str) {
        self.display(category, message, DisplayType::Warning, Priority::High);
    }

    pub fn error(&mut self, category: &str, message: &str) {
        self.display(category, message, DisplayType::Error, Priority::High);
    }

    /// Render an error, its hint, and every wrapped cause.
    pub fn display_error(&mut self, category: &str, err: &(dyn Error + 'static)) {
        self.display_chain(category, err, DisplayType::Error);
    }

    /// Render an error chain at warning level; duplicates are shown once.
    pub fn display_warning(&mut self, category: &str, err: &(dyn Error + 'static)) {
        self.display_chain(category, err, DisplayType::Warning);
    }

    /// Tell the user how many messages were hidden, if any.
    pub fn display_tip(&mut self) {
        if self.suppressed == 0 || self.verbosity == Priority::Silent {
            return;
        }
        let noun = if self.suppressed == 1 {
            "message was"
        } else {
            "messages were"
        };
        let text = format!(
            "{} {noun} hidden at verbosity `{}`; lower the verbosity (for example `--verbose`) to see them",
            self.suppressed, self.verbosity
        );
        self.emit(LABEL_WARNING, &text, DisplayType::Warning, Priority::High);
    }

    /// Erase a lingering progress line, if the last line written was one.
    pub fn display_line_reset(&self) {
        console::lock(&self.console).display_line_reset();
    }

    fn remember_warning(&mut self, category: &str, message: &str) -> bool {
        self.seen_warnings
            .insert((category.to_string(), message.to_string()))
    }

    fn display_chain(&mut self, category: &str, err: &(dyn Error + 'static), kind: DisplayType) {
        let primary = err.to_string();
        if kind == DisplayType::Warning && !self.remember_warning(category, &primary) {
            return;
        }
        let priority = Priority::High;
        self.show(category, &primary, kind, priority);
        if let Some(hint) = hint_of(err) {
            self.show(LABEL_HINT, hint, DisplayType::Hint, priority);
        }
        let mut cause = err.source();
        while let Some(inner) = cause {
            self.show(
                LABEL_CONTINUATION,
                &inner.to_string(),
                DisplayType::Details,
                priority,
            );
            cause = inner.source();
        }
    }

    fn show(&mut self, category: &str, message: &str, kind: DisplayType, priority: Priority) {
        if priority < self.verbosity {
            if priority != Priority::Debug {
                self.suppressed += 1;
            }
            if self.color && self.verbosity != Priority::Silent {
                let label = placeholder_label(category, message);
                self.emit(label, "", DisplayType::Progress, priority);
            }
            return;
        }

        let mut first = true;
        for line in message.lines().filter(|line| !line.is_empty()) {
            let label = if first { category } else { LABEL_CONTINUATION };
            first = false;
            self.emit(label, line, kind, priority);
        }
    }

    fn emit(&self, category: &str, line: &str, kind: DisplayType, priority: Priority) {
        let options = self.line_options(kind);
        if let Err(err) =
            console::lock(&self.console).display_line(options, category, line, kind, priority)
        {
            tracing::warn!(error = %err, category, "failed to write status line");
        }
    }

    fn line_options(&self, kind: DisplayType) -> LineOptions {
        LineOptions {
            color: self.color,
            terse: self.suppress_non_essential
                && kind.is_non_essential()
                && self.verbosity == Priority::High,
        }
    }
}
