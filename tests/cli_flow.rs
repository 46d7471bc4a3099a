//! Drives the `marquee` binary with piped stdin/stdout.
//!
//! Piped output is never a terminal, so list prompts take the line-based
//! fallback and every run is deterministic.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};

static RUN_COUNTER: AtomicU64 = AtomicU64::new(0);

struct Sandbox {
    root: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let id = RUN_COUNTER.fetch_add(1, Ordering::Relaxed);
        let root = std::env::temp_dir().join(format!(
            "marquee-cli-{}-{id}",
            std::process::id()
        ));
        fs::create_dir_all(root.join("xdg")).expect("create sandbox");
        Self { root }
    }

    fn path(&self) -> &Path {
        &self.root
    }

    fn run(&self, args: &[&str], stdin: &str) -> Output {
        self.run_with_env(args, stdin, &[])
    }

    fn run_with_env(&self, args: &[&str], stdin: &str, env: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_marquee"));
        cmd.args(args)
            .current_dir(&self.root)
            .env("XDG_CONFIG_HOME", self.root.join("xdg"))
            .env_remove("MARQUEE_VERBOSITY")
            .env_remove("MARQUEE_COLOR")
            .env_remove("MARQUEE_LOG")
            .env_remove("NO_COLOR")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in env {
            cmd.env(key, value);
        }
        let mut child = cmd.spawn().expect("spawn marquee");
        if let Some(mut pipe) = child.stdin.take() {
            // forced answers may exit before reading; a broken pipe is fine
            let _ = pipe.write_all(stdin.as_bytes());
        }
        child.wait_with_output().expect("wait for marquee")
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn say_prints_a_labeled_line() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(
        &["--no-color", "say", "Build", "done", "--priority", "high"],
        "",
    );
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Build"), "got: {text:?}");
    assert!(text.trim_end().ends_with("done"), "got: {text:?}");
}

#[test]
fn hidden_message_is_reported_by_the_tip() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["--no-color", "say", "Info", "quiet detail"], "");
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(!text.contains("quiet detail"));
    assert!(text.contains("1 message was hidden"), "got: {text:?}");

    let out = sandbox.run(&["--no-color", "-v", "say", "Info", "quiet detail"], "");
    assert!(stdout(&out).contains("quiet detail"));
}

#[test]
fn silent_environment_suppresses_everything() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_with_env(
        &["say", "Info", "anything", "--priority", "high"],
        "",
        &[("MARQUEE_VERBOSITY", "silent")],
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
}

#[test]
fn confirm_exit_status_follows_the_answer() {
    let sandbox = Sandbox::new();
    assert_eq!(sandbox.run(&["--no-color", "confirm", "Go?"], "y\n").status.code(), Some(0));
    assert_eq!(sandbox.run(&["--no-color", "confirm", "Go?"], "nah\n").status.code(), Some(1));
    assert_eq!(sandbox.run(&["--no-color", "confirm", "Go?"], "").status.code(), Some(1));
    assert_eq!(sandbox.run(&["--no-color", "confirm", "Go?", "--yes"], "").status.code(), Some(0));
    assert_eq!(sandbox.run(&["--no-color", "confirm", "Go?", "--no"], "y\n").status.code(), Some(1));
}

#[test]
fn ask_retries_until_an_answer_arrives() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["--no-color", "ask", "Name?"], "\n\nAda\n");
    assert!(out.status.success());
    let text = stdout(&out);
    assert_eq!(text.matches("Name?").count(), 3);
    // piped input is not echoed, so the answer lands after the label
    assert!(text.trim_end().ends_with("Ada"), "got: {text:?}");
}

#[test]
fn ask_falls_back_to_default() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["--no-color", "ask", "Name?", "--default", "guest"], "\n");
    assert!(stdout(&out).trim_end().ends_with("guest"));
}

#[test]
fn choose_matches_typed_answer_case_insensitively() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["--no-color", "choose", "Target", "debug", "release"], "RELEASE\n");
    assert!(out.status.success());
    assert!(stdout(&out).trim_end().ends_with("release"));

    let out = sandbox.run(&["--no-color", "choose", "Target", "debug", "release"], "bench\n");
    assert!(!out.status.success());
}

#[test]
fn local_config_file_is_honoured_and_cli_flags_win() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.path().join("marquee.toml"),
        "[display]\nverbosity = \"low\"\ncolor = false\n",
    )
    .expect("write config");
    let out = sandbox.run(&["say", "Info", "shown at low"], "");
    assert!(stdout(&out).contains("shown at low"));

    let out = sandbox.run(&["--quiet", "say", "Info", "hidden again"], "");
    assert_eq!(stdout(&out), "");
}

#[test]
fn invalid_config_fails_with_an_error_line() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.path().join("marquee.toml"),
        "[display]\nspinner_frames = [\"a\"]\n",
    )
    .expect("write config");
    let out = sandbox.run(&["--no-color", "demo"], "");
    assert!(!out.status.success());
    assert!(stdout(&out).contains("failed to load configuration"));
}

#[test]
fn version_includes_build_metadata() {
    let sandbox = Sandbox::new();
    let out = sandbox.run(&["--version"], "");
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("marquee "));
    assert!(text.contains("commit:"));
}

#[test]
fn debug_log_reports_resolved_configuration() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_with_env(
        &["--no-color", "-vv", "say", "Info", "logged"],
        "",
        &[("MARQUEE_LOG", "debug")],
    );
    assert!(out.status.success());
    let log = String::from_utf8_lossy(&out.stderr);
    assert!(log.contains("configuration resolved"), "got: {log:?}");
    assert!(log.contains("verbosity=low"), "got: {log:?}");
    assert!(stdout(&out).contains("logged"));
}
