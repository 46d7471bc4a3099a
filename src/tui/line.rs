//! Category-label formatting and the spinner/progress cursor state.

use crate::display::{DisplayType, Priority};
use crate::error::ConfigError;
use crate::tui::settings::{
    self, CATEGORY_SPACER, CATEGORY_WIDTH, SPINNER_FRAMES, SPINNER_FRAME_COUNT,
};
use crate::tui::terminal::{Terminal, TextStyle};
use std::io;

/// Cyclic spinner glyph set, always exactly `SPINNER_FRAME_COUNT` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerFrames([String; SPINNER_FRAME_COUNT]);

impl SpinnerFrames {
    /// Build a frame set, rejecting any glyph count other than the fixed one.
    pub fn new<S: Into<String>>(glyphs: impl IntoIterator<Item = S>) -> Result<Self, ConfigError> {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();
        let count = glyphs.len();
        <[String; SPINNER_FRAME_COUNT]>::try_from(glyphs)
            .map(Self)
            .map_err(|_| {
                ConfigError::Invalid(format!(
                    "spinner_frames must contain exactly {} glyphs, got {count}",
                    SPINNER_FRAME_COUNT
                ))
            })
    }

    pub fn glyph(&self, index: usize) -> &str {
        &self.0[index % SPINNER_FRAME_COUNT]
    }
}

impl Default for SpinnerFrames {
    fn default() -> Self {
        Self(SPINNER_FRAMES.map(str::to_string))
    }
}

/// What the physical terminal last showed, shared by every session on it.
#[derive(Debug, Clone, Default)]
pub struct ProgressCursor {
    last_line_was_progress: bool,
    frame: usize,
    frames: SpinnerFrames,
}

impl ProgressCursor {
    pub fn last_line_was_progress(&self) -> bool {
        self.last_line_was_progress
    }

    /// Index of the glyph the next progress line will use.
    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn current_glyph(&self) -> &str {
        self.frames.glyph(self.frame)
    }

    /// Replace the frame set and restart the cycle.
    pub fn set_frames(&mut self, frames: SpinnerFrames) {
        self.frames = frames;
        self.frame = 0;
    }

    pub(crate) fn advance(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAME_COUNT;
    }

    pub(crate) fn mark_progress(&mut self, progress: bool) {
        self.last_line_was_progress = progress;
    }
}

/// Right-pad a category to the shared label column.
pub fn pad_category(category: &str) -> String {
    format!("{category:<width$}", width = CATEGORY_WIDTH)
}

/// Write the aligned category label and the spacer after it.
pub fn write_label(
    term: &mut dyn Terminal,
    color: bool,
    category: &str,
    kind: DisplayType,
    priority: Priority,
) -> io::Result<()> {
    let label = pad_category(category);
    if color {
        term.write_styled(
            &label,
            TextStyle::new(settings::color_for(kind), settings::weight_for(priority)),
        )?;
    } else {
        term.write_plain(&label)?;
    }
    term.write_plain(CATEGORY_SPACER)
}

/// Write one complete, non-progress labeled line.
pub fn write_labeled_line(
    term: &mut dyn Terminal,
    color: bool,
    category: &str,
    text: &str,
    kind: DisplayType,
    priority: Priority,
) -> io::Result<()> {
    write_label(term, color, category, kind, priority)?;
    term.write_plain(text)?;
    term.write_plain("\n")
}
