//! tarsh-kernel: the core of tarsh.
//!
//! This crate provides:
//!
//! - **Paths**: normalization of user paths into namespace keys
//! - **Archive**: the [`ArchiveSource`](archive::ArchiveSource) seam over tar files
//! - **Namespace**: archive entries plus session-created directories
//! - **Kernel**: parses a command line and runs the matching builtin

pub mod archive;
pub mod builtins;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod interpreter;
pub mod kernel;
pub mod namespace;
pub mod paths;

pub use config::ShellConfig;
pub use error::{KeyExists, LoadError, ShellError, VfsError};
pub use interpreter::{ControlFlow, ExecResult};
pub use kernel::Kernel;
