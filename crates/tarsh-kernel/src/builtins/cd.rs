//! cd — Change working directory.

use crate::context::ExecContext;
use crate::error::{ExpectedKind, ShellError};
use crate::interpreter::ExecResult;
use crate::paths::ROOT;

/// Change to `path`, or to the root when no path is given.
pub fn execute(path: Option<&str>, ctx: &mut ExecContext) -> ExecResult {
    let Some(path) = path else {
        ctx.set_cwd(ROOT.to_string());
        return ExecResult::success("");
    };

    let resolved = ctx.resolve_path(path);
    if ctx.set_cwd(resolved) {
        ExecResult::success("")
    } else {
        ShellError::PathNotFound {
            command: "cd",
            path: path.to_string(),
            expected: ExpectedKind::Directory,
        }
        .into()
    }
}
