//! Shared terminal context: the I/O boundary plus the progress-line state.
//!
//! Only one physical cursor exists, so the "last line was a spinner" flag
//! and the spinner frame index live here rather than on a session. Every
//! session writing to the same terminal shares one `Console`.

use crate::display::{DisplayType, Priority};
use crate::tui::line::{self, ProgressCursor, SpinnerFrames};
use crate::tui::settings::{self, TERSE_MARKER};
use crate::tui::terminal::{CursorMotion, StdTerminal, Terminal, TextStyle};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Console handle shared between sessions.
pub type SharedConsole = Arc<Mutex<Console>>;

/// Per-line rendering switches decided by the calling session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineOptions {
    /// Style labels with color and weight.
    pub color: bool,
    /// Write only the terse marker instead of the line.
    pub terse: bool,
}

/// A terminal together with its progress-cursor state.
pub struct Console {
    term: Box<dyn Terminal>,
    progress: ProgressCursor,
}

impl Console {
    pub fn new(term: impl Terminal + 'static) -> Self {
        Self {
            term: Box::new(term),
            progress: ProgressCursor::default(),
        }
    }

    pub fn into_shared(self) -> SharedConsole {
        Arc::new(Mutex::new(self))
    }

    /// Process-wide console on stdout.
    pub fn shared() -> SharedConsole {
        static STDOUT: OnceLock<SharedConsole> = OnceLock::new();
        Arc::clone(STDOUT.get_or_init(|| Console::new(StdTerminal::new()).into_shared()))
    }

    pub fn terminal(&mut self) -> &mut dyn Terminal {
        self.term.as_mut()
    }

    pub fn progress(&self) -> &ProgressCursor {
        &self.progress
    }

    pub fn set_spinner_frames(&mut self, frames: SpinnerFrames) {
        self.progress.set_frames(frames);
    }

    /// Erase the previous line if it was a spinner line.
    ///
    /// Cursor failures are ignored: the redraw is cosmetic.
    pub fn display_line_reset(&mut self) {
        if !self.progress.last_line_was_progress() {
            return;
        }
        self.progress.mark_progress(false);
        let result = self
            .term
            .move_cursor(CursorMotion::Up(1))
            .and_then(|()| self.term.erase_line());
        if let Err(err) = result {
            tracing::debug!(error = %err, "could not erase previous progress line");
        }
    }

    /// Render one physical line.
    pub fn display_line(
        &mut self,
        options: LineOptions,
        category: &str,
        text: &str,
        kind: DisplayType,
        priority: Priority,
    ) -> io::Result<()> {
        self.display_line_reset();

        if options.terse {
            self.term.write_plain(TERSE_MARKER)?;
            return self.term.flush();
        }

        if kind != DisplayType::Progress {
            line::write_labeled_line(
                self.term.as_mut(),
                options.color,
                category,
                text,
                kind,
                priority,
            )?;
            return self.term.flush();
        }

        line::write_label(self.term.as_mut(), options.color, category, kind, priority)?;
        let glyph = self.progress.current_glyph();
        if options.color {
            self.term.write_styled(
                glyph,
                TextStyle::new(settings::COLOR_PROGRESS, settings::weight_for(priority)),
            )?;
        } else {
            self.term.write_plain(glyph)?;
        }
        self.term.write_plain(" ")?;
        self.term.write_plain(text)?;
        self.term.write_plain("\n")?;
        self.progress.advance();
        self.progress.mark_progress(true);
        self.term.flush()
    }

    /// Write the aligned `Answer:` label that precedes user input.
    pub fn write_answer_label(&mut self, color: bool) -> io::Result<()> {
        line::write_label(
            self.term.as_mut(),
            color,
            settings::LABEL_ANSWER,
            DisplayType::Message,
            Priority::High,
        )?;
        self.term.flush()
    }
}

/// Lock a shared console, recovering from a poisoned lock.
pub fn lock(console: &SharedConsole) -> MutexGuard<'_, Console> {
    console.lock().unwrap_or_else(PoisonError::into_inner)
}
