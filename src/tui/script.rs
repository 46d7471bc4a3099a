//! In-memory terminal for tests and headless embedders.
//!
//! `ScriptedTerminal` records every primitive the display core issues and
//! answers key/line reads from pre-queued input. Clones share state, so a
//! caller can hand one clone to a [`Console`](crate::tui::Console) and keep
//! another to inspect what was written.

use crate::tui::terminal::{CursorMotion, Key, Terminal, TextStyle};
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One recorded terminal primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOp {
    Styled { text: String, style: TextStyle },
    Plain(String),
    Move(CursorMotion),
    EraseLine,
    CursorVisible(bool),
    ResetAttributes,
    Flush,
}

impl TermOp {
    /// Visible text carried by this op, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Styled { text, .. } | Self::Plain(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct ScriptState {
    ops: Vec<TermOp>,
    keys: VecDeque<Key>,
    lines: VecDeque<String>,
    interactive: bool,
    fail_cursor: bool,
    keys_read: usize,
    lines_read: usize,
}

/// Recording terminal with scripted input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTerminal {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedTerminal {
    /// Non-interactive terminal with no queued input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the output stream as an interactive terminal.
    pub fn interactive(self) -> Self {
        self.state().interactive = true;
        self
    }

    /// Queue keypresses for `read_key`.
    pub fn with_keys(self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.state().keys.extend(keys);
        self
    }

    /// Queue input lines for `read_line`.
    pub fn with_lines<S: Into<String>>(self, lines: impl IntoIterator<Item = S>) -> Self {
        self.state().lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Make cursor movement and line erasing fail, like a dumb terminal.
    pub fn failing_cursor(self) -> Self {
        self.state().fail_cursor = true;
        self
    }

    pub fn ops(&self) -> Vec<TermOp> {
        self.state().ops.clone()
    }

    pub fn clear_ops(&self) {
        self.state().ops.clear();
    }

    /// All visible text written so far, styled and plain alike.
    pub fn text(&self) -> String {
        self.state().ops.iter().filter_map(TermOp::text).collect()
    }

    /// Written text split into newline-terminated lines.
    pub fn lines(&self) -> Vec<String> {
        let text = self.text();
        text.lines().map(str::to_string).collect()
    }

    /// Number of cursor movements recorded.
    pub fn cursor_moves(&self) -> usize {
        self.state()
            .ops
            .iter()
            .filter(|op| matches!(op, TermOp::Move(_)))
            .count()
    }

    pub fn keys_read(&self) -> usize {
        self.state().keys_read
    }

    pub fn lines_read(&self) -> usize {
        self.state().lines_read
    }

    fn state(&self) -> MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, op: TermOp) {
        self.state().ops.push(op);
    }

    fn cursor_op(&self, op: TermOp) -> io::Result<()> {
        if self.state().fail_cursor {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "cursor control unavailable",
            ));
        }
        self.record(op);
        Ok(())
    }
}

impl Terminal for ScriptedTerminal {
    fn write_styled(&mut self, text: &str, style: TextStyle) -> io::Result<()> {
        self.record(TermOp::Styled {
            text: text.to_string(),
            style,
        });
        Ok(())
    }

    fn write_plain(&mut self, text: &str) -> io::Result<()> {
        self.record(TermOp::Plain(text.to_string()));
        Ok(())
    }

    fn move_cursor(&mut self, motion: CursorMotion) -> io::Result<()> {
        self.cursor_op(TermOp::Move(motion))
    }

    fn erase_line(&mut self) -> io::Result<()> {
        self.cursor_op(TermOp::EraseLine)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.record(TermOp::CursorVisible(visible));
        Ok(())
    }

    fn reset_attributes(&mut self) -> io::Result<()> {
        self.record(TermOp::ResetAttributes);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.record(TermOp::Flush);
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        self.state().interactive
    }

    fn read_key(&mut self) -> io::Result<Key> {
        let mut state = self.state();
        let key = state.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted keys left")
        })?;
        state.keys_read += 1;
        Ok(key)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut state = self.state();
        let line = state.lines.pop_front();
        if line.is_some() {
            state.lines_read += 1;
        }
        Ok(line)
    }
}
