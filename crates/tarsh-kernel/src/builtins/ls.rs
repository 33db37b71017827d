//! ls — List the current directory.

use crate::builtins::EMPTY_LISTING;
use crate::context::ExecContext;
use crate::interpreter::ExecResult;

/// List children of cwd, one name per line, or the empty marker.
pub fn execute(ctx: &ExecContext) -> ExecResult {
    let names = ctx.namespace.list_children(ctx.cwd());
    if names.is_empty() {
        ExecResult::success(EMPTY_LISTING)
    } else {
        ExecResult::success(names.join("\n"))
    }
}
