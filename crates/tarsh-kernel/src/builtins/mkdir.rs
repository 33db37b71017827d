//! mkdir — Create a session directory.

use crate::context::ExecContext;
use crate::error::ShellError;
use crate::interpreter::ExecResult;

/// Create `path` in the overlay.
pub fn execute(path: Option<&str>, ctx: &mut ExecContext) -> ExecResult {
    let Some(path) = path else {
        return ShellError::MissingOperand { command: "mkdir" }.into();
    };

    let resolved = ctx.resolve_path(path);
    match ctx.namespace.create_directory(&resolved) {
        Ok(()) => ExecResult::success(format!("Directory '{path}' created")),
        Err(_) => ShellError::AlreadyExists {
            command: "mkdir",
            path: path.to_string(),
        }
        .into(),
    }
}
