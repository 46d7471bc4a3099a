//! Terminal building blocks: styling table, I/O boundary, progress line,
//! and the interactive selector.
//!
//! Everything that touches the physical terminal goes through the
//! [`Terminal`] trait so the display layer can run against
//! [`ScriptedTerminal`] in tests.

pub mod console;
pub mod line;
pub mod script;
pub mod selector;
pub mod settings;
pub mod terminal;

pub use console::{Console, LineOptions, SharedConsole};
pub use line::{ProgressCursor, SpinnerFrames};
pub use script::{ScriptedTerminal, TermOp};
pub use selector::{select_fallback, Selector, SelectorState};
pub use terminal::{CursorMotion, HiddenCursor, Key, StdTerminal, Terminal, TextStyle};
