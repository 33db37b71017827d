//! The Kernel: runs one command line at a time against a session.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    Kernel                    │
//! │  ┌──────────────┐   ┌─────────────────────┐  │
//! │  │   Command    │──▶│  builtins           │  │
//! │  │   (parse)    │   │  cd ls mkdir rev    │  │
//! │  └──────────────┘   └──────────┬──────────┘  │
//! │                                ▼             │
//! │  ┌─────────────────────────────────────────┐ │
//! │  │ ExecContext: cwd + VirtualNamespace     │ │
//! │  │   ArchiveIndex (Arc) + created dirs     │ │
//! │  └─────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use crate::archive::{ArchiveSource, TarArchive};
use crate::builtins;
use crate::command::Command;
use crate::config::ShellConfig;
use crate::context::ExecContext;
use crate::error::{LoadError, ShellError};
use crate::interpreter::{ControlFlow, ExecResult};
use crate::namespace::{ArchiveIndex, VirtualNamespace};

/// A shell session over one archive.
#[derive(Debug)]
pub struct Kernel {
    ctx: ExecContext,
}

impl Kernel {
    /// Create a session over an already loaded archive index.
    ///
    /// Sessions sharing an index see the same archive but keep their own
    /// working directory and created directories.
    pub fn new(archive: Arc<ArchiveIndex>) -> Self {
        Self {
            ctx: ExecContext::new(VirtualNamespace::new(archive)),
        }
    }

    /// Load `source` and create a session over it.
    pub fn from_source(source: impl ArchiveSource + 'static) -> std::io::Result<Self> {
        Ok(Self::new(Arc::new(ArchiveIndex::load(source)?)))
    }

    /// Open the archive named in `config` and create a session over it.
    pub fn from_config(config: &ShellConfig) -> Result<Self, LoadError> {
        let path = &config.archive_path;
        TarArchive::open(path)
            .and_then(Self::from_source)
            .map_err(|source| LoadError::Archive {
                path: path.clone(),
                source,
            })
    }

    /// Execute one input line.
    pub fn execute(&mut self, line: &str) -> ControlFlow {
        let command = Command::parse(line);
        tracing::trace!(?command, "dispatch");

        let result = match command {
            Command::Empty => ExecResult::success(""),
            Command::Cd { path } => builtins::cd::execute(path, &mut self.ctx),
            Command::Ls => builtins::ls::execute(&self.ctx),
            Command::Mkdir { path } => builtins::mkdir::execute(path, &mut self.ctx),
            Command::Rev { path } => builtins::rev::execute(path, &self.ctx),
            Command::Exit => return ControlFlow::Exit,
            Command::Unknown { line } => ShellError::UnknownCommand {
                line: line.to_string(),
            }
            .into(),
        };
        ControlFlow::ok(result)
    }

    /// Current working directory key.
    pub fn cwd(&self) -> &str {
        self.ctx.cwd()
    }

    /// Prompt for the next line: `/` or `/a/b` followed by ` $ `.
    pub fn prompt(&self) -> String {
        format!("{} $ ", self.ctx.cwd_display())
    }
}
