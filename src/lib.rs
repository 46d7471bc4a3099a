//! Marquee: priority-filtered status lines, in-place progress spinners, and
//! keyboard-driven prompts for command-line programs.
//!
//! A [`display::Session`] decides which messages reach the terminal, counts
//! the ones it hides, and animates a spinner placeholder so long-running work
//! never looks stalled. Prompts answer themselves when forced, which keeps
//! scripted runs from blocking.
//!
//! # Quick start
//!
//! ```no_run
//! use marquee::display::{DisplayType, ForcePrompt, Priority, Session};
//!
//! let mut session = Session::stdout();
//! session.set_verbosity(Priority::Medium);
//! session.display("Compiling", "main.rs", DisplayType::Progress, Priority::Medium);
//! if session.prompt(ForcePrompt::DontForce, "Install now?").unwrap_or(false) {
//!     session.success("Install", "done");
//! }
//! session.display_tip();
//! ```

pub mod build_info;
pub mod config;
pub mod display;
pub mod error;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
