//! Terminal I/O boundary.
//!
//! Everything the display core needs from the hosting terminal goes through
//! the [`Terminal`] trait so tests and embedders can swap in their own
//! implementation. [`StdTerminal`] is the crossterm-backed stdout version.

use crate::tui::settings::Weight;
use crossterm::cursor::{Hide, MoveDown, MoveLeft, MoveRight, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Color, Print, PrintStyledContent, ResetColor, SetAttribute, Stylize,
};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, BufRead, IsTerminal, Stdout, Write};
use std::ops::{Deref, DerefMut};

/// Foreground color plus weight for one styled write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub weight: Weight,
}

impl TextStyle {
    pub fn new(color: Color, weight: Weight) -> Self {
        Self {
            color: Some(color),
            weight,
        }
    }

    /// Weight-only style with the terminal's default color.
    pub fn weight(weight: Weight) -> Self {
        Self {
            color: None,
            weight,
        }
    }
}

/// Relative cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMotion {
    Up(u16),
    Down(u16),
    Forward(u16),
    Backward(u16),
    /// Return to column zero of the current row.
    LineStart,
}

/// One decoded keypress as seen by the interactive selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Up,
    Down,
    /// Ctrl-C.
    Interrupt,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Interrupt,
            KeyCode::Tab => Self::Tab,
            KeyCode::Enter => Self::Enter,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            _ => Self::Other,
        }
    }
}

/// Primitives the display core requires from the hosting terminal.
pub trait Terminal: Send {
    fn write_styled(&mut self, text: &str, style: TextStyle) -> io::Result<()>;
    fn write_plain(&mut self, text: &str) -> io::Result<()>;
    fn move_cursor(&mut self, motion: CursorMotion) -> io::Result<()>;
    /// Erase the row the cursor is on.
    fn erase_line(&mut self) -> io::Result<()>;
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;
    fn reset_attributes(&mut self) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    /// Whether output goes to an interactive terminal.
    fn is_interactive(&self) -> bool;
    /// Block until one keypress arrives.
    fn read_key(&mut self) -> io::Result<Key>;
    /// Block until one line arrives; `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Crossterm-backed terminal writing to stdout and reading from stdin.
pub struct StdTerminal {
    out: Stdout,
}

impl StdTerminal {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for StdTerminal {
    fn write_styled(&mut self, text: &str, style: TextStyle) -> io::Result<()> {
        let mut styled = text.stylize();
        if let Some(color) = style.color {
            styled = styled.with(color);
        }
        styled = match style.weight {
            Weight::Dim => styled.dim(),
            Weight::Bright => styled.bold(),
            Weight::Normal => styled,
        };
        self.out.queue(PrintStyledContent(styled))?;
        Ok(())
    }

    fn write_plain(&mut self, text: &str) -> io::Result<()> {
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn move_cursor(&mut self, motion: CursorMotion) -> io::Result<()> {
        match motion {
            CursorMotion::Up(n) => self.out.queue(MoveUp(n))?,
            CursorMotion::Down(n) => self.out.queue(MoveDown(n))?,
            CursorMotion::Forward(n) => self.out.queue(MoveRight(n))?,
            CursorMotion::Backward(n) => self.out.queue(MoveLeft(n))?,
            CursorMotion::LineStart => self.out.queue(MoveToColumn(0))?,
        };
        Ok(())
    }

    fn erase_line(&mut self) -> io::Result<()> {
        self.out.queue(MoveToColumn(0))?;
        self.out.queue(Clear(ClearType::CurrentLine))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.out.queue(Show)?;
        } else {
            self.out.queue(Hide)?;
        }
        Ok(())
    }

    fn reset_attributes(&mut self) -> io::Result<()> {
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn is_interactive(&self) -> bool {
        self.out.is_terminal()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        let _guard = RawModeGuard::acquire()?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
                continue;
            }
            return Ok(Key::from(key));
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Hides the cursor until dropped.
///
/// Derefs to the wrapped terminal so callers keep drawing through the guard.
pub struct HiddenCursor<'a> {
    term: &'a mut dyn Terminal,
}

impl<'a> HiddenCursor<'a> {
    pub fn acquire(term: &'a mut dyn Terminal) -> io::Result<Self> {
        term.set_cursor_visible(false)?;
        Ok(Self { term })
    }
}

impl<'a> Deref for HiddenCursor<'a> {
    type Target = dyn Terminal + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.term
    }
}

impl<'a> DerefMut for HiddenCursor<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.term
    }
}

impl Drop for HiddenCursor<'_> {
    fn drop(&mut self) {
        let _ = self.term.set_cursor_visible(true);
        let _ = self.term.flush();
    }
}
