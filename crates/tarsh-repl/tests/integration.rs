//! Integration tests for the tarsh REPL.
//!
//! These run scripts and scripted console input through a `Repl` and check
//! what gets printed.

use std::collections::VecDeque;
use std::io::Cursor;

use anyhow::Result;
use tarsh_kernel::Kernel;
use tarsh_kernel::archive::{MemoryArchive, TarArchive};
use tarsh_repl::{LineSource, PlainInput, ReadOutcome, Repl, ScriptEnd, UNDECODABLE_LINE};
use tarsh_testutil::{Entry, Fixture};

fn sample_repl() -> Repl {
    let archive = MemoryArchive::new()
        .with_file("file1.txt", "Hello, world!")
        .with_dir("docs")
        .with_file("docs/readme.md", "read me")
        .with_dir("docs/api");
    Repl::new(Kernel::from_source(archive).expect("load archive"))
}

/// Run a script through a fresh REPL and return everything it printed.
fn run_script(script: &str) -> (String, ScriptEnd) {
    let mut repl = sample_repl();
    let mut out = Vec::new();
    let end = repl.run_script(script, &mut out).expect("script runs");
    (String::from_utf8(out).expect("utf-8 output"), end)
}

/// Console input fed from a list, remembering every prompt shown.
struct ScriptedInput {
    lines: VecDeque<ReadOutcome>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| ReadOutcome::Line(l.to_string()))
                .collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}

// ============================================================================
// Scripts
// ============================================================================

#[test]
fn script_rev_scenario() {
    let (out, end) = run_script("rev file1.txt\n");
    assert_eq!(out, "!dlrow ,olleH\n");
    assert_eq!(end, ScriptEnd::Finished);
}

#[test]
fn script_mkdir_twice_then_ls() {
    let (out, _) = run_script("cd docs/api\nmkdir new_folder\nmkdir new_folder\nls\n");
    assert_eq!(
        out,
        "Directory 'new_folder' created\n\
         mkdir: cannot create directory 'new_folder': File exists\n\
         new_folder\n"
    );
}

#[test]
fn script_failed_cd_keeps_listing() {
    let (out, _) = run_script("ls\ncd nonexistent\nls\n");
    assert_eq!(
        out,
        "file1.txt\ndocs\ncd: nonexistent: No such directory\nfile1.txt\ndocs\n"
    );
}

#[test]
fn script_unknown_command_continues() {
    let (out, end) = run_script("foobar\nls\n");
    assert_eq!(out, "foobar: command not found\nfile1.txt\ndocs\n");
    assert_eq!(end, ScriptEnd::Finished);
}

#[test]
fn script_exit_stops_early() {
    let (out, end) = run_script("ls\nexit\nrev file1.txt\n");
    assert_eq!(out, "file1.txt\ndocs\n");
    assert_eq!(end, ScriptEnd::Exited);
}

#[test]
fn script_blank_lines_are_silent() {
    let (out, _) = run_script("\n\nrev file1.txt\n\n");
    assert_eq!(out, "!dlrow ,olleH\n");
}

#[test]
fn script_crlf_lines() {
    let (out, _) = run_script("cd docs\r\nls\r\n");
    assert_eq!(out, "readme.md\napi\n");
}

#[test]
fn script_unknown_command_echoes_whole_line() {
    let (out, _) = run_script("  foobar --x  \n");
    assert_eq!(out, "foobar --x: command not found\n");
}

#[test]
fn script_missing_operands() {
    let (out, _) = run_script("mkdir\nrev\n");
    assert_eq!(out, "mkdir: missing operand\nrev: missing operand\n");
}

#[test]
fn script_cd_dotdot_returns_to_parent() {
    let mut repl = sample_repl();
    let mut out = Vec::new();
    repl.run_script("cd docs/api\ncd ..\n", &mut out).unwrap();
    assert_eq!(repl.kernel().cwd(), "docs");
    repl.run_script("cd ..\ncd ..\ncd ..\n", &mut out).unwrap();
    assert_eq!(repl.kernel().cwd(), "");
    assert!(out.is_empty());
}

// ============================================================================
// Startup script files
// ============================================================================

#[test]
fn startup_script_missing_is_skipped() {
    let fx = Fixture::new().unwrap();
    let mut repl = sample_repl();
    let mut out = Vec::new();

    let end = repl
        .run_startup_script(&fx.path().join("absent.sh"), &mut out)
        .unwrap();
    assert_eq!(end, ScriptEnd::Finished);
    assert!(out.is_empty());
}

#[test]
fn startup_script_runs_before_prompt() {
    let fx = Fixture::new().unwrap();
    let script = fx.write("startup.sh", "mkdir work\ncd work\n").unwrap();
    let mut repl = sample_repl();
    let mut out = Vec::new();

    repl.run_startup_script(&script, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Directory 'work' created\n");
    assert_eq!(repl.kernel().prompt(), "/work $ ");
}

#[test]
fn startup_script_exit() {
    let fx = Fixture::new().unwrap();
    let script = fx.write("startup.sh", "exit\n").unwrap();
    let mut repl = sample_repl();
    let end = repl.run_startup_script(&script, &mut Vec::new()).unwrap();
    assert_eq!(end, ScriptEnd::Exited);
}

// ============================================================================
// Interactive phase
// ============================================================================

#[test]
fn interactive_prompts_follow_cwd() {
    let mut repl = sample_repl();
    let mut input = ScriptedInput::new(&["cd docs", "cd api", "cd /", "exit", "ls"]);
    let mut out = Vec::new();

    repl.run_interactive(&mut input, &mut out).unwrap();
    assert_eq!(
        input.prompts,
        ["/ $ ", "/docs $ ", "/docs/api $ ", "/ $ "]
    );
    assert!(out.is_empty());
    // `ls` after exit was never read
    assert_eq!(input.lines.len(), 1);
}

#[test]
fn interactive_eof_ends_session() {
    let mut repl = sample_repl();
    let mut input = ScriptedInput::new(&["mkdir foo", "cd foo", "ls"]);
    let mut out = Vec::new();

    repl.run_interactive(&mut input, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Directory 'foo' created\n(empty)\n"
    );
    assert_eq!(input.prompts.last().map(String::as_str), Some("/foo $ "));
}

#[test]
fn interactive_interrupt_reprompts() {
    let mut repl = sample_repl();
    let mut input = ScriptedInput::new(&[]);
    input.lines.push_back(ReadOutcome::Interrupted);
    input.lines.push_back(ReadOutcome::Line("rev docs/readme.md".into()));
    let mut out = Vec::new();

    repl.run_interactive(&mut input, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "^C\nem daer\n");
    assert_eq!(input.prompts.len(), 3);
}

#[test]
fn plain_input_writes_prompts_and_strips_newlines() {
    let mut repl = sample_repl();
    let mut input = PlainInput::new(Cursor::new("cd docs\r\nls\n"), Vec::new());
    let mut out = Vec::new();

    repl.run_interactive(&mut input, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "readme.md\napi\n");
    assert_eq!(
        String::from_utf8(input.into_prompt_out()).unwrap(),
        "/ $ /docs $ /docs $ "
    );
}

#[test]
fn plain_input_survives_invalid_utf8() {
    let mut repl = sample_repl();
    let mut input = PlainInput::new(Cursor::new(b"ls\n\xff\nls\n"), Vec::new());
    let mut out = Vec::new();

    repl.run_interactive(&mut input, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "file1.txt\ndocs\n\u{fffd}: command not found\nfile1.txt\ndocs\n"
    );
    assert_eq!(
        String::from_utf8(input.into_prompt_out()).unwrap(),
        "/ $ / $ / $ / $ "
    );
}

#[test]
fn interactive_undecodable_line_reprompts() {
    let mut repl = sample_repl();
    let mut input = ScriptedInput::new(&[]);
    input.lines.push_back(ReadOutcome::Undecodable);
    input.lines.push_back(ReadOutcome::Line("ls".into()));
    let mut out = Vec::new();

    repl.run_interactive(&mut input, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{UNDECODABLE_LINE}\nfile1.txt\ndocs\n")
    );
    assert_eq!(input.prompts.len(), 3);
}

// ============================================================================
// Tar-backed sessions
// ============================================================================

#[test]
fn tar_session_end_to_end() {
    let fx = Fixture::new().unwrap();
    let path = fx
        .tar(
            "fs.tar",
            &[
                Entry::File("file1.txt", b"Hello, world!"),
                Entry::Dir("docs"),
                Entry::File("docs/notes.txt", "héllo\n".as_bytes()),
            ],
        )
        .unwrap();
    let mut repl = Repl::new(Kernel::from_source(TarArchive::open(path).unwrap()).unwrap());
    let mut out = Vec::new();

    repl.run_script(
        "ls\nrev file1.txt\ncd docs\nrev notes.txt\nrev ../docs\n",
        &mut out,
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "file1.txt\ndocs\n!dlrow ,olleH\n\nolléh\nrev: ../docs: No such file\n"
    );
}

#[test]
fn tar_read_failure_is_reported_and_session_survives() {
    let fx = Fixture::new().unwrap();
    let path = fx
        .tar("fs.tar", &[Entry::File("file1.txt", b"Hello, world!")])
        .unwrap();
    let mut repl = Repl::new(Kernel::from_source(TarArchive::open(&path).unwrap()).unwrap());
    fx.corrupt(&path).unwrap();

    let mut out = Vec::new();
    repl.run_script("rev file1.txt\nls\n", &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    let mut lines = out.lines();

    let first = lines.next().unwrap();
    assert!(first.starts_with("rev: file1.txt: "), "{first}");
    assert_ne!(first, "rev: file1.txt: No such file");
    assert_eq!(lines.next(), Some("file1.txt"));
}

#[test]
fn tar_rev_of_empty_file_prints_blank_line() {
    let fx = Fixture::new().unwrap();
    let path = fx
        .tar("fs.tar", &[Entry::File("empty.txt", b"")])
        .unwrap();
    let mut repl = Repl::new(Kernel::from_source(TarArchive::open(path).unwrap()).unwrap());
    let mut out = Vec::new();

    repl.run_script("rev empty.txt\nls\ncd /\n", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\nempty.txt\n");
}
