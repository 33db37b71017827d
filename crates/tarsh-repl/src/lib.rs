//! tarsh REPL — drives a [`Kernel`] from a startup script and then from the
//! console.
//!
//! A session has two phases:
//!
//! 1. **Startup**: each line of the configured script is run in order. If the
//!    script is absent this phase is skipped; `exit` ends the whole session.
//! 2. **Interactive**: prompt with `<cwd> $ `, run the line, repeat until
//!    `exit` or end of input.
//!
//! On a terminal lines come from rustyline; otherwise they are read from
//! stdin with the prompt written to stdout. Input that is not valid UTF-8
//! never ends the session.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use tarsh_kernel::{ControlFlow, ExecResult, Kernel, ShellConfig};

/// Printed in place of a line that could not be decoded.
pub const UNDECODABLE_LINE: &str = "tarsh: input is not valid UTF-8";

/// Result of reading one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// The user pressed ^C; the line is abandoned.
    Interrupted,
    /// The line could not be decoded and was dropped.
    Undecodable,
    /// No more input.
    Eof,
}

/// Where interactive lines come from.
pub trait LineSource {
    /// Show `prompt` and read the next line, without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

/// Terminal input through rustyline, with in-memory history.
pub struct EditorInput {
    editor: Editor<(), DefaultHistory>,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        let editor = Editor::new().context("Failed to create editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                Ok(ReadOutcome::Undecodable)
            }
            Err(err) => Err(err).context("Failed to read line"),
        }
    }
}

/// Line-buffered input with the prompt written to a separate stream.
pub struct PlainInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PlainInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }

    /// Consume the input, returning the prompt stream.
    pub fn into_prompt_out(self) -> W {
        self.prompt_out
    }
}

impl<R: BufRead, W: Write> LineSource for PlainInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let mut buf = Vec::new();
        if self
            .reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read line")?
            == 0
        {
            return Ok(ReadOutcome::Eof);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(ReadOutcome::Line(
            line.trim_end_matches(['\n', '\r']).to_string(),
        ))
    }
}

/// How the startup phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEnd {
    /// All lines ran (or there was no script); go interactive.
    Finished,
    /// The script ran `exit`.
    Exited,
}

/// REPL state: one kernel session.
pub struct Repl {
    kernel: Kernel,
}

impl Repl {
    /// Create a REPL around a kernel.
    pub fn new(kernel: Kernel) -> Self {
        Self { kernel }
    }

    /// Open the archive named in `config`.
    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        Ok(Self::new(Kernel::from_config(config)?))
    }

    /// The underlying kernel.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> ControlFlow {
        self.kernel.execute(line)
    }

    /// Run one line and print its output. Returns true on `exit`.
    fn feed(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let flow = self.process_line(line);
        if let Some(text) = flow.result().and_then(ExecResult::text) {
            writeln!(out, "{text}")?;
        }
        Ok(flow.is_exit())
    }

    /// Run every line of `script` in order.
    pub fn run_script(&mut self, script: &str, out: &mut impl Write) -> Result<ScriptEnd> {
        for line in script.lines() {
            if self.feed(line, out)? {
                return Ok(ScriptEnd::Exited);
            }
        }
        Ok(ScriptEnd::Finished)
    }

    /// Run the startup script at `path`, if there is one.
    pub fn run_startup_script(&mut self, path: &Path, out: &mut impl Write) -> Result<ScriptEnd> {
        let script = match fs::read(path) {
            Ok(script) => script,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no startup script at {}", path.display());
                return Ok(ScriptEnd::Finished);
            }
            Err(e) => {
                tracing::warn!("skipping startup script {}: {}", path.display(), e);
                return Ok(ScriptEnd::Finished);
            }
        };
        tracing::debug!("running startup script {}", path.display());
        self.run_script(&String::from_utf8_lossy(&script), out)
    }

    /// Prompt and run lines until `exit` or end of input.
    pub fn run_interactive(
        &mut self,
        input: &mut impl LineSource,
        out: &mut impl Write,
    ) -> Result<()> {
        loop {
            let prompt = self.kernel.prompt();
            match input.read_line(&prompt)? {
                ReadOutcome::Line(line) => {
                    if self.feed(&line, out)? {
                        break;
                    }
                }
                ReadOutcome::Interrupted => {
                    writeln!(out, "^C")?;
                }
                ReadOutcome::Undecodable => {
                    tracing::debug!("dropped a line that is not valid UTF-8");
                    writeln!(out, "{UNDECODABLE_LINE}")?;
                }
                ReadOutcome::Eof => break,
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Do not run the startup script.
    pub skip_startup: bool,
}

/// Load the config, then run the startup and interactive phases on stdio.
pub fn run(config_path: &Path, options: RunOptions) -> Result<()> {
    let config = ShellConfig::load(config_path)?;
    let mut repl = Repl::from_config(&config)?;
    let mut out = io::stdout();

    if !options.skip_startup
        && repl.run_startup_script(&config.startup_script_path, &mut out)? == ScriptEnd::Exited
    {
        return Ok(());
    }

    if io::stdin().is_terminal() {
        let mut input = EditorInput::new()?;
        repl.run_interactive(&mut input, &mut out)
    } else {
        let mut input = PlainInput::new(io::stdin().lock(), io::stdout());
        repl.run_interactive(&mut input, &mut out)
    }
}
