//! Execution context for builtins.

use crate::namespace::VirtualNamespace;
use crate::paths::{self, ROOT};

/// Session state passed to builtins.
///
/// Owns the namespace (and with it the session's created directories) and the
/// current working directory.
#[derive(Debug)]
pub struct ExecContext {
    /// Archive entries plus created directories.
    pub namespace: VirtualNamespace,
    /// Current working directory as a key. Always root or a directory.
    cwd: String,
}

impl ExecContext {
    /// Create a context at the root directory.
    pub fn new(namespace: VirtualNamespace) -> Self {
        Self {
            namespace,
            cwd: ROOT.to_string(),
        }
    }

    /// Current working directory key.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Current working directory as shown in the prompt.
    pub fn cwd_display(&self) -> String {
        paths::display(&self.cwd)
    }

    /// Resolve a user path relative to cwd.
    pub fn resolve_path(&self, path: &str) -> String {
        paths::resolve(&self.cwd, path)
    }

    /// Change the current working directory.
    ///
    /// Returns false, leaving cwd alone, unless `key` is a directory.
    pub fn set_cwd(&mut self, key: String) -> bool {
        if !self.namespace.is_directory(&key) {
            return false;
        }
        self.cwd = key;
        true
    }
}
