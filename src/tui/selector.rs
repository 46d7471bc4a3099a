//! Keyboard-driven list selection.
//!
//! The interactive selector reserves one row per option below the cursor,
//! redraws them in place on every key, and clears them once a choice is
//! made. The fallback selector reads a typed answer for non-TTY output.

use crate::display::{DisplayType, Priority};
use crate::error::PromptError;
use crate::tui::line::{write_label, write_labeled_line};
use crate::tui::settings::{
    self, Weight, LABEL_ANSWER, LABEL_CONTINUATION, LABEL_HINT, SELECTOR_HELP,
    SELECTOR_MARKER_LEFT, SELECTOR_MARKER_RIGHT, SELECTOR_UNSELECTED_PAD,
};
use crate::tui::terminal::{CursorMotion, HiddenCursor, Key, Terminal, TextStyle};
use std::io;

/// Where the selector is in its key loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Rendering,
    AwaitingKey,
    Selected,
    Cancelled,
}

/// State machine choosing one of N options.
#[derive(Debug, Clone)]
pub struct Selector {
    options: Vec<String>,
    index: usize,
    state: SelectorState,
}

impl Selector {
    /// Start at the first option; an empty list is rejected.
    pub fn new<S: AsRef<str>>(options: &[S]) -> Result<Self, PromptError> {
        if options.is_empty() {
            return Err(PromptError::NoOptions);
        }
        Ok(Self {
            options: options
                .iter()
                .map(|option| AsRef::<str>::as_ref(option).to_string())
                .collect(),
            index: 0,
            state: SelectorState::Rendering,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn current(&self) -> &str {
        &self.options[self.index]
    }

    /// Apply one key and return the resulting state.
    pub fn handle_key(&mut self, key: Key) -> SelectorState {
        let count = self.options.len();
        self.state = match key {
            Key::Tab | Key::Down => {
                self.index = (self.index + 1) % count;
                SelectorState::Rendering
            }
            Key::Up => {
                self.index = (self.index + count - 1) % count;
                SelectorState::Rendering
            }
            Key::Enter => SelectorState::Selected,
            Key::Interrupt => SelectorState::Cancelled,
            Key::Other => SelectorState::AwaitingKey,
        };
        tracing::trace!(index = self.index, state = ?self.state, "selector key handled");
        self.state
    }

    /// Drive the selector on `term` until a choice is made or cancelled.
    ///
    /// A help line is written once above the reserved rows. On success the reserved rows are cleared and an `Answer:` line with
    /// the choice is written in their place.
    pub fn run(mut self, term: &mut dyn Terminal, color: bool) -> Result<String, PromptError> {
        let rows = self.rows();
        write_labeled_line(
            term,
            color,
            LABEL_HINT,
            SELECTOR_HELP,
            DisplayType::Hint,
            Priority::High,
        )?;
        for _ in 0..self.options.len() {
            term.write_plain("\n")?;
        }
        cosmetic(term.move_cursor(CursorMotion::Up(rows)));

        {
            let mut hidden = HiddenCursor::acquire(&mut *term)?;
            loop {
                match self.state {
                    SelectorState::Rendering => {
                        self.render(&mut *hidden, color)?;
                        self.state = SelectorState::AwaitingKey;
                    }
                    SelectorState::AwaitingKey => {
                        let key = hidden.read_key()?;
                        self.handle_key(key);
                    }
                    SelectorState::Selected => break,
                    SelectorState::Cancelled => {
                        self.clear_rows(&mut *hidden)?;
                        return Err(PromptError::Cancelled);
                    }
                }
            }
            self.clear_rows(&mut *hidden)?;
        }

        let choice = self.options.swap_remove(self.index);
        write_label(term, color, LABEL_ANSWER, DisplayType::Message, Priority::High)?;
        term.write_plain(&choice)?;
        term.write_plain("\n")?;
        term.flush()?;
        Ok(choice)
    }

    fn rows(&self) -> u16 {
        u16::try_from(self.options.len()).unwrap_or(u16::MAX)
    }

    fn render(&self, term: &mut dyn Terminal, color: bool) -> io::Result<()> {
        for (idx, option) in self.options.iter().enumerate() {
            cosmetic(term.erase_line());
            let active = idx == self.index;
            let row = if active {
                format!("{SELECTOR_MARKER_LEFT}{option}{SELECTOR_MARKER_RIGHT}")
            } else {
                format!("{SELECTOR_UNSELECTED_PAD}{option}")
            };
            if color {
                let style = if active {
                    TextStyle::new(settings::COLOR_HINT, Weight::Bright)
                } else {
                    TextStyle::weight(Weight::Dim)
                };
                term.write_styled(&row, style)?;
            } else {
                term.write_plain(&row)?;
            }
            cosmetic(term.move_cursor(CursorMotion::LineStart));
            cosmetic(term.move_cursor(CursorMotion::Down(1)));
        }
        cosmetic(term.move_cursor(CursorMotion::Up(self.rows())));
        term.reset_attributes()?;
        term.flush()
    }

    fn clear_rows(&self, term: &mut dyn Terminal) -> io::Result<()> {
        for _ in 0..self.options.len() {
            cosmetic(term.erase_line());
            cosmetic(term.move_cursor(CursorMotion::Down(1)));
        }
        cosmetic(term.move_cursor(CursorMotion::Up(self.rows())));
        term.flush()
    }
}

/// Line-based selection for output that is not a terminal.
///
/// Lists the options, reads one line, and matches it case-insensitively.
/// Returns `None` when the answer matches no option.
pub fn select_fallback<S: AsRef<str>>(
    term: &mut dyn Terminal,
    color: bool,
    options: &[S],
) -> Result<Option<String>, PromptError> {
    if options.is_empty() {
        return Err(PromptError::NoOptions);
    }
    let listing = options
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    write_labeled_line(
        term,
        color,
        LABEL_CONTINUATION,
        &format!("({listing})"),
        DisplayType::Message,
        Priority::High,
    )?;
    write_label(term, color, LABEL_ANSWER, DisplayType::Message, Priority::High)?;
    term.flush()?;

    let Some(answer) = term.read_line()? else {
        return Ok(None);
    };
    let wanted = answer.trim().to_lowercase();
    Ok(options
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|option| option.to_lowercase() == wanted)
        .map(str::to_string))
}

fn cosmetic(result: io::Result<()>) {
    if let Err(err) = result {
        tracing::debug!(error = %err, "selector cursor control failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::line::pad_category;
    use crate::tui::script::{ScriptedTerminal, TermOp};

    fn selector(n: usize) -> Selector {
        let options: Vec<String> = (0..n).map(|i| format!("opt{i}")).collect();
        Selector::new(options.as_slice()).unwrap()
    }

    #[test]
    fn empty_options_are_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(Selector::new(&empty), Err(PromptError::NoOptions)));
    }

    #[test]
    fn tab_wraps_after_n_presses() {
        let mut sel = selector(4);
        for _ in 0..4 {
            assert_eq!(sel.handle_key(Key::Tab), SelectorState::Rendering);
        }
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn up_from_first_wraps_to_last() {
        let mut sel = selector(3);
        sel.handle_key(Key::Up);
        assert_eq!(sel.index(), 2);
        sel.handle_key(Key::Down);
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut sel = selector(3);
        assert_eq!(sel.handle_key(Key::Other), SelectorState::AwaitingKey);
        assert_eq!(sel.index(), 0);
        assert_eq!(sel.handle_key(Key::Enter), SelectorState::Selected);
        assert_eq!(sel.current(), "opt0");
    }

    #[test]
    fn run_selects_and_writes_answer() {
        let probe = ScriptedTerminal::new()
            .interactive()
            .with_keys([Key::Tab, Key::Other, Key::Down, Key::Up, Key::Enter]);
        let mut term = probe.clone();
        let choice = selector(3).run(&mut term, false).unwrap();
        assert_eq!(choice, "opt1");

        let ops = probe.ops();
        assert_eq!(ops.iter().filter(|op| **op == TermOp::CursorVisible(false)).count(), 1);
        assert_eq!(ops.last(), Some(&TermOp::Flush));
        assert!(ops.contains(&TermOp::CursorVisible(true)));
        let text = probe.text();
        assert!(text.contains("> opt1 <"));
        assert!(text.ends_with("opt1\n"), "got: {text:?}");
        assert_eq!(probe.keys_read(), 5);
    }

    #[test]
    fn help_line_precedes_the_option_rows() {
        let probe = ScriptedTerminal::new().with_keys([Key::Enter]);
        let mut term = probe.clone();
        selector(2).run(&mut term, false).unwrap();
        let text = probe.text();
        let help = text
            .find(&format!("{} {SELECTOR_HELP}\n", pad_category(LABEL_HINT)))
            .expect("help line written");
        assert!(help < text.find("> opt0 <").unwrap());
        assert_eq!(text.matches(SELECTOR_HELP).count(), 1);
    }

    #[test]
    fn run_survives_failing_cursor() {
        let probe = ScriptedTerminal::new()
            .failing_cursor()
            .with_keys([Key::Tab, Key::Enter]);
        let mut term = probe.clone();
        let options = ["a", "b"];
        let choice = Selector::new(&options).unwrap().run(&mut term, false).unwrap();
        assert_eq!(choice, "b");
        let ops = probe.ops();
        let hidden = ops
            .iter()
            .position(|op| *op == TermOp::CursorVisible(false))
            .expect("cursor hidden");
        let shown = ops
            .iter()
            .rposition(|op| *op == TermOp::CursorVisible(true))
            .expect("cursor shown again");
        assert!(shown > hidden);
        assert!(probe.text().ends_with("b\n"));
    }

    #[test]
    fn every_render_returns_cursor_to_list_top() {
        let probe = ScriptedTerminal::new().with_keys([Key::Tab, Key::Enter]);
        let mut term = probe.clone();
        selector(2).run(&mut term, true).unwrap();
        let ups = probe
            .ops()
            .iter()
            .filter(|op| **op == TermOp::Move(CursorMotion::Up(2)))
            .count();
        // reserve + two renders + teardown
        assert_eq!(ups, 4);
    }

    #[test]
    fn interrupt_cancels_and_restores_cursor() {
        let probe = ScriptedTerminal::new().with_keys([Key::Tab, Key::Interrupt]);
        let mut term = probe.clone();
        let result = selector(2).run(&mut term, false);
        assert!(matches!(result, Err(PromptError::Cancelled)));
        let ops = probe.ops();
        let hidden = ops
            .iter()
            .position(|op| *op == TermOp::CursorVisible(false))
            .unwrap();
        let shown = ops
            .iter()
            .rposition(|op| *op == TermOp::CursorVisible(true))
            .unwrap();
        assert!(shown > hidden);
        assert!(!probe.text().contains(LABEL_ANSWER));
    }

    #[test]
    fn fallback_matches_case_insensitively() {
        let probe = ScriptedTerminal::new().with_lines(["  BETA "]);
        let mut term = probe.clone();
        let choice = select_fallback(&mut term, false, &["alpha", "beta"]).unwrap();
        assert_eq!(choice.as_deref(), Some("beta"));
        assert!(probe.text().contains("(alpha, beta)"));
    }

    #[test]
    fn fallback_returns_none_without_match() {
        let mut term = ScriptedTerminal::new().with_lines(["gamma"]);
        assert_eq!(select_fallback(&mut term, false, &["alpha"]).unwrap(), None);
        let mut eof = ScriptedTerminal::new();
        assert_eq!(select_fallback(&mut eof, false, &["alpha"]).unwrap(), None);
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn n_advances_return_to_start(n in 1usize..32, start_moves in 0usize..64) {
                let mut sel = selector(n);
                for _ in 0..start_moves {
                    sel.handle_key(Key::Down);
                }
                let start = sel.index();
                for _ in 0..n {
                    sel.handle_key(Key::Tab);
                }
                prop_assert_eq!(sel.index(), start);
                sel.handle_key(Key::Up);
                prop_assert_eq!(sel.index(), (start + n - 1) % n);
            }
        }
    }
}
