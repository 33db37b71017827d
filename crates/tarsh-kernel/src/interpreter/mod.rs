//! Results and control flow of command execution.

mod control_flow;
mod result;

pub use control_flow::ControlFlow;
pub use result::ExecResult;
