//! Centralized, hardcoded UI settings for status lines and prompts.
//!
//! This is the single place to tweak labels, glyphs, colors, and the
//! category column layout.

use crate::display::{DisplayType, Priority};
use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Category column
// ---------------------------------------------------------------------------

/// Typical caller categories, listed only to widen the column.
pub const WIDTH_HINT_DOWNLOADING: &str = "Downloading";
pub const WIDTH_HINT_COMPILING: &str = "Compiling";

/// Labels the library emits plus the width hints; the widest sets the column.
pub const STANDARD_CATEGORIES: [&str; 11] = [
    LABEL_ERROR,
    LABEL_WARNING,
    LABEL_HINT,
    LABEL_ANSWER,
    LABEL_QUESTION,
    LABEL_SCANNING,
    LABEL_UPDATING,
    LABEL_WORKING,
    LABEL_CONTINUATION,
    WIDTH_HINT_DOWNLOADING,
    WIDTH_HINT_COMPILING,
];

/// Width every category label is padded to.
pub const CATEGORY_WIDTH: usize = longest(&STANDARD_CATEGORIES);

const fn longest(labels: &[&str]) -> usize {
    let mut max = 0;
    let mut idx = 0;
    while idx < labels.len() {
        if labels[idx].len() > max {
            max = labels[idx].len();
        }
        idx += 1;
    }
    max
}

pub const CATEGORY_SPACER: &str = " ";

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const LABEL_ERROR: &str = "Error";
pub const LABEL_WARNING: &str = "Warning";
pub const LABEL_HINT: &str = "Hint";
pub const LABEL_ANSWER: &str = "Answer:";
pub const LABEL_QUESTION: &str = "Question";
pub const LABEL_SCANNING: &str = "Scanning";
pub const LABEL_UPDATING: &str = "Updating";
pub const LABEL_WORKING: &str = "Working";
/// Category used for the second and later lines of a multi-line message.
pub const LABEL_CONTINUATION: &str = "...";

/// Written in place of a full line when non-essential output is suppressed.
pub const TERSE_MARKER: &str = ".";

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

pub const PROMPT_YES_NO_SUFFIX: &str = " [y/N]";
pub const FORCED_YES: &str = "yes (forced)";
pub const FORCED_NO: &str = "no (forced)";

pub const SELECTOR_MARKER_LEFT: &str = "> ";
pub const SELECTOR_MARKER_RIGHT: &str = " <";
pub const SELECTOR_UNSELECTED_PAD: &str = "  ";
/// Instruction line drawn above the selector rows.
pub const SELECTOR_HELP: &str = "Tab/↑/↓ to move, Enter to choose";

/// Upper bound on re-prompts for a free-text question with no default.
pub const MAX_CUSTOM_PROMPT_ATTEMPTS: usize = 64;

// ---------------------------------------------------------------------------
// Spinner / progress
// ---------------------------------------------------------------------------

pub const SPINNER_FRAME_COUNT: usize = 8;
pub const SPINNER_FRAMES: [&str; SPINNER_FRAME_COUNT] =
    ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

// ---------------------------------------------------------------------------
// Style table
// ---------------------------------------------------------------------------

/// Text weight applied on top of the category color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Dim,
    Normal,
    Bright,
}

pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_DETAILS: Color = Color::Grey;
pub const COLOR_HINT: Color = Color::Cyan;
pub const COLOR_MESSAGE: Color = Color::Blue;
pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_PROGRESS: Color = Color::Magenta;

pub fn color_for(kind: DisplayType) -> Color {
    match kind {
        DisplayType::Error => COLOR_ERROR,
        DisplayType::Warning => COLOR_WARNING,
        DisplayType::Details => COLOR_DETAILS,
        DisplayType::Hint => COLOR_HINT,
        DisplayType::Message => COLOR_MESSAGE,
        DisplayType::Success => COLOR_SUCCESS,
        DisplayType::Progress => COLOR_PROGRESS,
    }
}

pub fn weight_for(priority: Priority) -> Weight {
    match priority {
        Priority::Debug | Priority::Low => Weight::Dim,
        Priority::Medium => Weight::Normal,
        Priority::High | Priority::Silent => Weight::Bright,
    }
}
