//! ExecResult: the outcome of running one command.

use crate::error::ShellError;

/// The result of executing a command.
///
/// `out` and `err` hold text without a trailing newline; the session loop
/// decides how to print them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output.
    pub out: String,
    /// Error message, one line.
    pub err: String,
    /// Print `out` as a line even when it is empty.
    pub echo_empty: bool,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
            echo_empty: false,
        }
    }

    /// Create a successful result whose output is always printed as a line.
    pub fn line(out: impl Into<String>) -> Self {
        Self {
            echo_empty: true,
            ..Self::success(out)
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
            echo_empty: false,
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// Everything the command printed, `out` then `err`, or `None` if silent.
    pub fn text(&self) -> Option<String> {
        match (self.out.is_empty(), self.err.is_empty()) {
            (true, true) => self.echo_empty.then(String::new),
            (false, true) => Some(self.out.clone()),
            (true, false) => Some(self.err.clone()),
            (false, false) => Some(format!("{}\n{}", self.out, self.err)),
        }
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}

impl From<ShellError> for ExecResult {
    fn from(err: ShellError) -> Self {
        Self::failure(1, err.to_string())
    }
}
