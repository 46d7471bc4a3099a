//! Liveness placeholders shown in place of suppressed messages.
//!
//! When a message falls below the verbosity threshold the session still
//! animates a spinner line so the user can tell work is happening. The label
//! on that line is picked from this rule table; the first matching rule
//! wins and `Working` is the fallback.

use crate::tui::settings::{LABEL_SCANNING, LABEL_UPDATING, LABEL_WORKING};

/// Category that marks an external command invocation.
pub const EXECUTING_CATEGORY: &str = "Executing";
/// Message suffixes identifying a scan step of an executed command.
pub const SCAN_MARKERS: [&str; 2] = ["--scan", " scan"];
/// Message prefixes identifying a version-control invocation.
pub const VCS_PREFIXES: [&str; 3] = ["git ", "hg ", "svn "];

/// One pattern → placeholder label mapping.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderRule {
    pub label: &'static str,
    matcher: fn(&str, &str) -> bool,
}

impl PlaceholderRule {
    pub const fn new(label: &'static str, matcher: fn(&str, &str) -> bool) -> Self {
        Self { label, matcher }
    }

    pub fn matches(&self, category: &str, message: &str) -> bool {
        (self.matcher)(category, message)
    }
}

fn is_scan(category: &str, message: &str) -> bool {
    category == EXECUTING_CATEGORY
        && SCAN_MARKERS
            .iter()
            .any(|marker| message.trim_end().ends_with(marker))
}

fn is_vcs(_category: &str, message: &str) -> bool {
    VCS_PREFIXES
        .iter()
        .any(|prefix| message.trim_start().starts_with(prefix))
}

/// Built-in rules, checked in order.
pub static PLACEHOLDER_RULES: [PlaceholderRule; 2] = [
    PlaceholderRule::new(LABEL_SCANNING, is_scan),
    PlaceholderRule::new(LABEL_UPDATING, is_vcs),
];

/// Pick the placeholder label for a suppressed message.
pub fn placeholder_label(category: &str, message: &str) -> &'static str {
    placeholder_label_with(&PLACEHOLDER_RULES, category, message)
}

/// Pick a placeholder label from a caller-supplied rule table.
pub fn placeholder_label_with(
    rules: &[PlaceholderRule],
    category: &str,
    message: &str,
) -> &'static str {
    rules
        .iter()
        .find(|rule| rule.matches(category, message))
        .map_or(LABEL_WORKING, |rule| rule.label)
}
