//! Control flow signal for the session loop.

use super::result::ExecResult;

/// What the session loop should do after a line has run.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlFlow {
    /// Keep reading lines; print the result.
    Normal(ExecResult),
    /// `exit` was run; stop the session.
    Exit,
}

impl ControlFlow {
    /// Create a normal control flow.
    pub fn ok(result: ExecResult) -> Self {
        ControlFlow::Normal(result)
    }

    /// True if this is an exit signal.
    pub fn is_exit(&self) -> bool {
        matches!(self, ControlFlow::Exit)
    }

    /// The result, if the session continues.
    pub fn result(&self) -> Option<&ExecResult> {
        match self {
            ControlFlow::Normal(result) => Some(result),
            ControlFlow::Exit => None,
        }
    }
}
