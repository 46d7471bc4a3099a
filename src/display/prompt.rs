//! Yes/no, free-text, and list prompts.
//!
//! Forced modes answer without touching input so scripted runs never block.

use crate::display::{DisplayType, ForcePrompt, Priority, Session};
use crate::error::PromptError;
use crate::tui::console::{self, Console};
use crate::tui::line::write_labeled_line;
use crate::tui::selector::{select_fallback, Selector};
use crate::tui::settings::{
    FORCED_NO, FORCED_YES, LABEL_QUESTION, MAX_CUSTOM_PROMPT_ATTEMPTS, PROMPT_YES_NO_SUFFIX,
};

impl Session {
    /// Ask a yes/no question; anything but `y`/`yes` counts as no.
    ///
    /// At `Silent` verbosity an unforced prompt answers yes without reading.
    pub fn prompt(&mut self, force: ForcePrompt, question: &str) -> Result<bool, PromptError> {
        match force {
            ForcePrompt::ForceYes => {
                self.announce_forced(question, FORCED_YES);
                return Ok(true);
            }
            ForcePrompt::ForceNo => {
                self.announce_forced(question, FORCED_NO);
                return Ok(false);
            }
            ForcePrompt::DontForce => {}
        }
        if self.verbosity() == Priority::Silent {
            return Ok(true);
        }

        let color = self.color();
        let mut console = console::lock(self.console());
        ask(
            &mut console,
            color,
            &format!("{question}{PROMPT_YES_NO_SUFFIX}"),
        )?;
        let answer = console.terminal().read_line()?.unwrap_or_default();
        Ok(is_yes(&answer))
    }

    /// Ask for free text.
    ///
    /// With an empty `default` the question repeats until a non-empty answer
    /// arrives; otherwise an empty answer returns `default`.
    pub fn prompt_custom(
        &mut self,
        force: ForcePrompt,
        question: &str,
        default: &str,
    ) -> Result<String, PromptError> {
        if force == ForcePrompt::ForceYes {
            self.announce_forced(question, &format!("`{default}` (forced)"));
            return Ok(default.to_string());
        }

        let color = self.color();
        let shown = if default.is_empty() {
            question.to_string()
        } else {
            format!("{question} [{default}]")
        };
        let mut console = console::lock(self.console());
        for _ in 0..MAX_CUSTOM_PROMPT_ATTEMPTS {
            ask(&mut console, color, &shown)?;
            let line = console.terminal().read_line()?;
            if let Some(answer) = line.as_deref().filter(|text| !text.trim().is_empty()) {
                return Ok(answer.to_string());
            }
            if !default.is_empty() {
                return Ok(default.to_string());
            }
            if line.is_none() {
                break;
            }
        }
        Err(PromptError::NoAnswer)
    }

    /// Ask the user to pick one of `options`.
    ///
    /// Interactive terminals get the arrow-key selector; other outputs read a
    /// typed answer and yield `None` when it matches no option.
    pub fn prompt_list<S: AsRef<str>>(
        &mut self,
        force: ForcePrompt,
        question: &str,
        options: &[S],
    ) -> Result<Option<String>, PromptError> {
        let Some(first) = options.first() else {
            return Err(PromptError::NoOptions);
        };
        if force == ForcePrompt::ForceYes {
            let first = AsRef::<str>::as_ref(first).to_string();
            self.announce_forced(question, &format!("`{first}` (forced)"));
            return Ok(Some(first));
        }

        let color = self.color();
        let mut console = console::lock(self.console());
        console.display_line_reset();
        write_labeled_line(
            console.terminal(),
            color,
            LABEL_QUESTION,
            question,
            DisplayType::Message,
            Priority::High,
        )?;
        if console.terminal().is_interactive() {
            let choice = Selector::new(options)?.run(console.terminal(), color)?;
            return Ok(Some(choice));
        }
        select_fallback(console.terminal(), color, options)
    }

    fn announce_forced(&mut self, question: &str, outcome: &str) {
        self.display(
            LABEL_QUESTION,
            &format!("{question} -> {outcome}"),
            DisplayType::Warning,
            Priority::High,
        );
    }
}

/// Render a question line followed by the `Answer:` label.
fn ask(console: &mut Console, color: bool, question: &str) -> std::io::Result<()> {
    console.display_line_reset();
    write_labeled_line(
        console.terminal(),
        color,
        LABEL_QUESTION,
        question,
        DisplayType::Message,
        Priority::High,
    )?;
    console.write_answer_label(color)
}

/// Whether a typed answer means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
