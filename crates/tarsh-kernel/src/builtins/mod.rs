//! Builtin commands.
//!
//! One module per command. Each exposes `execute`, taking the command's
//! operand (if it has one) and the session context.

pub mod cd;
pub mod ls;
pub mod mkdir;
pub mod rev;

/// Marker printed by `ls` for a directory with no children.
pub const EMPTY_LISTING: &str = "(empty)";

#[cfg(test)]
pub(crate) mod test_support {
    use crate::archive::MemoryArchive;
    use crate::context::ExecContext;
    use crate::namespace::VirtualNamespace;

    /// Context over a small archive:
    ///
    /// ```text
    /// /file1.txt          "Hello, world!"
    /// /docs/
    /// /docs/readme.md     "# readme"
    /// /docs/api/
    /// ```
    pub fn make_ctx() -> ExecContext {
        let archive = MemoryArchive::new()
            .with_file("file1.txt", "Hello, world!")
            .with_dir("docs")
            .with_file("docs/readme.md", "# readme")
            .with_dir("docs/api");
        ExecContext::new(VirtualNamespace::load(archive).unwrap())
    }
}
