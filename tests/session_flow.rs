//! End-to-end display and prompt flows through the public API.
//!
//! Every session here runs against a `ScriptedTerminal`, so the assertions
//! see exactly what would have reached the terminal.

use marquee::config::DisplayConfig;
use marquee::display::{DisplayType, ForcePrompt, Priority, Session};
use marquee::error::{DisplayError, PromptError};
use marquee::tui::line::pad_category;
use marquee::tui::settings::{LABEL_ANSWER, LABEL_CONTINUATION, LABEL_HINT, LABEL_UPDATING};
use marquee::tui::{Console, CursorMotion, Key, ScriptedTerminal, SharedConsole, TermOp};
use std::io;

fn console_over(term: &ScriptedTerminal) -> SharedConsole {
    Console::new(term.clone()).into_shared()
}

fn plain_session(console: SharedConsole, verbosity: Priority) -> Session {
    let config = DisplayConfig {
        verbosity,
        color: false,
        ..DisplayConfig::default()
    };
    Session::from_config(&config, console).expect("valid config")
}

#[test]
fn build_run_shows_filtered_output_and_ends_with_tip() {
    let term = ScriptedTerminal::new();
    let mut session = plain_session(console_over(&term), Priority::Medium);

    session.display("Resolve", "3 crates", DisplayType::Message, Priority::Medium);
    session.details("Resolve", "serde 1.0.200");
    session.debug("Resolve", "lockfile hash 9f2c");
    session.warning("Resolve", "yanked version in lockfile");
    session.warning("Resolve", "yanked version in lockfile");
    session.success("Build", "finished");
    session.display_tip();

    let lines = term.lines();
    assert_eq!(lines.len(), 4, "got: {lines:#?}");
    assert_eq!(lines[0], format!("{} 3 crates", pad_category("Resolve")));
    assert_eq!(
        lines[1],
        format!("{} yanked version in lockfile", pad_category("Resolve"))
    );
    assert_eq!(lines[2], format!("{} finished", pad_category("Build")));
    assert!(lines[3].contains("1 message was hidden"), "got: {}", lines[3]);
    assert_eq!(session.suppressed_count(), 1);
}

#[test]
fn sessions_on_one_console_share_the_progress_line() {
    let term = ScriptedTerminal::new();
    let console = console_over(&term);
    let mut fetcher = plain_session(console.clone(), Priority::Low);
    let mut builder = plain_session(console, Priority::Low);

    fetcher.progress("Fetch", "serde");
    assert_eq!(term.cursor_moves(), 0);
    builder.message("Build", "starting");

    let ops = term.ops();
    let up = ops
        .iter()
        .position(|op| *op == TermOp::Move(CursorMotion::Up(1)))
        .expect("progress line erased by the second session");
    assert_eq!(ops[up + 1], TermOp::EraseLine);
}

#[test]
fn suppressed_vcs_command_animates_updating_placeholder() {
    let term = ScriptedTerminal::new();
    let mut session = Session::new(console_over(&term));
    session.display(
        "Executing",
        "git pull --rebase",
        DisplayType::Message,
        Priority::Low,
    );
    session.display(
        "Executing",
        "git gc",
        DisplayType::Message,
        Priority::Low,
    );
    let text = term.text();
    assert_eq!(text.matches(LABEL_UPDATING).count(), 2);
    assert!(!text.contains("git pull"));
    // second placeholder replaces the first in place
    assert_eq!(term.cursor_moves(), 1);
    assert_eq!(session.suppressed_count(), 2);
}

#[test]
fn error_chain_renders_hint_and_every_cause() {
    let term = ScriptedTerminal::new();
    let mut session = plain_session(console_over(&term), Priority::High);
    let err = DisplayError::new("cannot publish")
        .with_hint("log in with `registry login`")
        .with_cause(DisplayError::new("token rejected").with_cause(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "401 unauthorized",
        )));
    session.display_error("Publish", &err);
    assert_eq!(
        term.lines(),
        vec![
            format!("{} cannot publish", pad_category("Publish")),
            format!("{} log in with `registry login`", pad_category(LABEL_HINT)),
            format!("{} token rejected", pad_category(LABEL_CONTINUATION)),
            format!("{} 401 unauthorized", pad_category(LABEL_CONTINUATION)),
        ]
    );
}

#[test]
fn interactive_choice_round_trip() {
    let term = ScriptedTerminal::new()
        .interactive()
        .with_keys([Key::Down, Key::Down, Key::Other, Key::Enter]);
    let mut session = plain_session(console_over(&term), Priority::High);
    let picked = session
        .prompt_list(ForcePrompt::DontForce, "Target", &["debug", "release", "bench"])
        .unwrap();
    assert_eq!(picked.as_deref(), Some("bench"));
    let text = term.text();
    assert!(
        text.ends_with(&format!("{} bench\n", pad_category(LABEL_ANSWER))),
        "got: {text:?}"
    );
    assert_eq!(term.ops().last(), Some(&TermOp::Flush));
}

#[test]
fn interrupt_in_selector_surfaces_cancellation() {
    let term = ScriptedTerminal::new()
        .interactive()
        .with_keys([Key::Interrupt]);
    let mut session = plain_session(console_over(&term), Priority::High);
    let result = session.prompt_list(ForcePrompt::DontForce, "Target", &["a", "b"]);
    assert!(matches!(result, Err(PromptError::Cancelled)));
    assert!(term.ops().contains(&TermOp::CursorVisible(true)));
}

#[test]
fn scripted_answers_drive_custom_and_yes_no_prompts() {
    let term = ScriptedTerminal::new().with_lines(["", "", "Ada", "yes"]);
    let mut session = plain_session(console_over(&term), Priority::High);
    let name = session
        .prompt_custom(ForcePrompt::DontForce, "Name?", "")
        .unwrap();
    assert_eq!(name, "Ada");
    assert!(session.prompt(ForcePrompt::DontForce, "Save?").unwrap());
    assert_eq!(term.lines_read(), 4);
}

#[test]
fn forced_prompts_leave_input_untouched() {
    let term = ScriptedTerminal::new().with_lines(["no"]);
    let mut session = plain_session(console_over(&term), Priority::High);
    assert!(session.prompt(ForcePrompt::ForceYes, "Overwrite?").unwrap());
    assert_eq!(term.lines_read(), 0);
    assert!(!session.prompt(ForcePrompt::DontForce, "Really?").unwrap());
    assert_eq!(term.lines_read(), 1);
}
