//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use marquee::display::{DisplayType, ForcePrompt, Priority};

/// Priority-filtered status lines and prompts for shell scripts.
#[derive(Debug, Parser)]
#[command(name = "marquee", disable_version_flag = true)]
pub struct Args {
    /// Path to config file (default: ./marquee.toml or ~/.config/marquee/marquee.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Minimum priority to show: debug, low, medium, high, or silent.
    #[arg(long = "verbosity", global = true, conflicts_with_all = ["verbose", "quiet"])]
    pub verbosity: Option<Priority>,

    /// Lower the threshold one step per occurrence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Show nothing but prompts and errors.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Print version and build metadata.
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one status line.
    Say {
        category: String,
        message: String,
        /// error, warning, details, hint, message, success, or progress.
        #[arg(long = "kind", default_value = "message")]
        kind: DisplayType,
        #[arg(long = "priority", default_value = "medium")]
        priority: Priority,
    },
    /// Ask a yes/no question; exits 0 on yes and 1 on no.
    Confirm {
        question: String,
        /// Answer yes without asking.
        #[arg(long = "yes", conflicts_with = "no")]
        yes: bool,
        /// Answer no without asking.
        #[arg(long = "no")]
        no: bool,
    },
    /// Ask for free text and print the answer.
    Ask {
        question: String,
        #[arg(long = "default", default_value = "")]
        default: String,
        /// Take the default without asking.
        #[arg(long = "yes")]
        yes: bool,
    },
    /// Pick one option and print it; exits 130 when cancelled.
    Choose {
        question: String,
        #[arg(required = true)]
        options: Vec<String>,
        /// Take the first option without asking.
        #[arg(long = "yes")]
        yes: bool,
    },
    /// Walk through spinners, suppression, and the hidden-message tip.
    Demo,
}

impl Args {
    /// Threshold requested on the command line, if any.
    pub fn verbosity_override(&self) -> Option<Priority> {
        if let Some(level) = self.verbosity {
            return Some(level);
        }
        if self.quiet {
            return Some(Priority::Silent);
        }
        match self.verbose {
            0 => None,
            1 => Some(Priority::Medium),
            2 => Some(Priority::Low),
            _ => Some(Priority::Debug),
        }
    }
}

/// Map `--yes`/`--no` switches to a force mode.
pub fn force_from_flags(yes: bool, no: bool) -> ForcePrompt {
    match (yes, no) {
        (true, _) => ForcePrompt::ForceYes,
        (false, true) => ForcePrompt::ForceNo,
        (false, false) => ForcePrompt::DontForce,
    }
}
