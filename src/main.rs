//! CLI entry point for marquee.

mod cli;

use clap::{CommandFactory, Parser};
use cli::{force_from_flags, Args, Command};
use marquee::build_info;
use marquee::config::load_config_with_source;
use marquee::display::{DisplayType, Priority, Session};
use marquee::error::{DisplayError, PromptError};
use std::io;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Filter directives for diagnostics on stderr; logging is off when unset.
const LOG_ENV: &str = "MARQUEE_LOG";
/// Conventional shell status for an interrupted command.
const EXIT_CANCELLED: u8 = 130;
const EXIT_NO: u8 = 1;
const DEMO_STEP_DELAY: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    if args.version {
        println!("{}", build_info::cli_version_text());
        return ExitCode::SUCCESS;
    }
    let Some(command) = args.command.as_ref() else {
        if let Err(e) = Args::command().print_help() {
            eprintln!("error: {e}");
        }
        return ExitCode::from(2);
    };

    let mut session = Session::stdout();
    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            let err = DisplayError::new("failed to load configuration")
                .with_hint("check the [display] table and MARQUEE_* environment variables")
                .with_cause(e);
            session.display_error("Config", &err);
            return ExitCode::FAILURE;
        }
    };

    // CLI flags override file and environment settings.
    let mut display_config = loaded.config.display;
    if let Some(level) = args.verbosity_override() {
        display_config.verbosity = level;
    }
    if args.no_color {
        display_config.color = false;
    }
    if let Err(e) = session.apply_config(&display_config) {
        session.display_error("Config", &e);
        return ExitCode::FAILURE;
    }
    tracing::debug!(source = %loaded.source, verbosity = %display_config.verbosity, "configuration resolved");

    let code = match run(command, &mut session) {
        Ok(code) => code,
        Err(PromptError::Cancelled) => ExitCode::from(EXIT_CANCELLED),
        Err(e) => {
            session.display_error("Prompt", &e);
            ExitCode::FAILURE
        }
    };
    session.display_tip();
    code
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true)
        .init();
}

fn run(command: &Command, session: &mut Session) -> Result<ExitCode, PromptError> {
    match command {
        Command::Say {
            category,
            message,
            kind,
            priority,
        } => {
            session.display(category, message, *kind, *priority);
            Ok(ExitCode::SUCCESS)
        }
        Command::Confirm { question, yes, no } => {
            if session.prompt(force_from_flags(*yes, *no), question)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_NO))
            }
        }
        Command::Ask {
            question,
            default,
            yes,
        } => {
            let answer = session.prompt_custom(force_from_flags(*yes, false), question, default)?;
            println!("{answer}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Choose {
            question,
            options,
            yes,
        } => match session.prompt_list(force_from_flags(*yes, false), question, options.as_slice())? {
            Some(choice) => {
                println!("{choice}");
                Ok(ExitCode::SUCCESS)
            }
            None => {
                session.error("Choose", "the answer matched none of the options");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Demo => run_demo(session),
    }
}

fn run_demo(session: &mut Session) -> Result<ExitCode, PromptError> {
    session.message("Demo", "lines below the threshold are counted, not shown");
    for step in ["resolve", "fetch", "unpack", "link"] {
        session.progress("Working", step);
        thread::sleep(DEMO_STEP_DELAY);
    }
    for command in ["git fetch --tags origin", "indexer --scan", "cc -O2 main.c"] {
        session.display("Executing", command, DisplayType::Message, Priority::Low);
        thread::sleep(DEMO_STEP_DELAY);
    }
    session.details("Build", "compiled 12 files\nlinked 1 binary");
    session.warning("Cache", "index is stale; rebuilding");
    session.warning("Cache", "index is stale; rebuilding");

    let missing = io::Error::new(io::ErrorKind::NotFound, "plugin.toml not found");
    let err = DisplayError::new("optional plugin step skipped")
        .with_hint("create plugin.toml to enable it")
        .with_cause(missing);
    session.display_warning("Plugin", &err);
    session.success("Demo", "finished");
    Ok(ExitCode::SUCCESS)
}
