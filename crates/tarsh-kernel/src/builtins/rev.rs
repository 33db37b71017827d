//! rev — Print a file with its characters reversed.

use std::io;

use crate::context::ExecContext;
use crate::error::{ExpectedKind, ShellError, VfsError};
use crate::interpreter::ExecResult;

/// Reverse text by `char`, so multi-byte characters stay intact.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Read archive file `path`, decode it as UTF-8 and print it reversed.
pub fn execute(path: Option<&str>, ctx: &ExecContext) -> ExecResult {
    let Some(path) = path else {
        return ShellError::MissingOperand { command: "rev" }.into();
    };

    let resolved = ctx.resolve_path(path);
    let data = match ctx.namespace.read_file(&resolved) {
        Ok(data) => data,
        Err(VfsError::Read { source, .. }) => {
            return ShellError::ArchiveRead {
                command: "rev",
                path: path.to_string(),
                source,
            }
            .into();
        }
        Err(_) => {
            return ShellError::PathNotFound {
                command: "rev",
                path: path.to_string(),
                expected: ExpectedKind::File,
            }
            .into();
        }
    };

    match String::from_utf8(data) {
        Ok(text) => ExecResult::line(reverse_text(&text)),
        Err(e) => ShellError::ArchiveRead {
            command: "rev",
            path: path.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::MemoryArchive;
    use crate::builtins::{cd, test_support::make_ctx};
    use crate::namespace::VirtualNamespace;
    use proptest::prelude::*;

    #[test]
    fn test_rev_file() {
        let ctx = make_ctx();
        let result = execute(Some("file1.txt"), &ctx);
        assert!(result.ok());
        assert_eq!(result.out, "!dlrow ,olleH");
    }

    #[test]
    fn test_rev_relative_path() {
        let mut ctx = make_ctx();
        cd::execute(Some("docs/api"), &mut ctx);
        assert_eq!(execute(Some("../readme.md"), &ctx).out, "emdaer #");
    }

    #[test]
    fn test_rev_multibyte() {
        assert_eq!(reverse_text("héllo → 世界"), "界世 → olléh");
    }

    #[test]
    fn test_rev_not_a_file() {
        let mut ctx = make_ctx();
        ctx.namespace.create_directory("made").unwrap();
        for name in ["docs", "made", "missing.txt"] {
            let result = execute(Some(name), &ctx);
            assert_eq!(result.err, format!("rev: {name}: No such file"));
        }
    }

    #[test]
    fn test_rev_empty_file_prints_blank_line() {
        let archive = MemoryArchive::new().with_file("empty.txt", "");
        let ctx = ExecContext::new(VirtualNamespace::load(archive).unwrap());
        let result = execute(Some("empty.txt"), &ctx);
        assert!(result.ok());
        assert_eq!(result.text().as_deref(), Some(""));
    }

    #[test]
    fn test_rev_missing_operand() {
        let ctx = make_ctx();
        assert_eq!(execute(None, &ctx).err, "rev: missing operand");
    }

    #[test]
    fn test_rev_invalid_utf8() {
        let archive = MemoryArchive::new().with_file("bin", vec![0xffu8, 0xfe, 0x00]);
        let ctx = ExecContext::new(VirtualNamespace::load(archive).unwrap());
        let result = execute(Some("bin"), &ctx);
        assert!(!result.ok());
        assert!(result.err.starts_with("rev: bin: "), "{}", result.err);
    }

    proptest! {
        #[test]
        fn reverse_is_an_involution(text in "[ -~\n]{0,64}") {
            prop_assert_eq!(reverse_text(&reverse_text(&text)), text);
        }
    }
}
