//! Core archive traits and types.

use std::fmt;
use std::io;

/// Kind of archive member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    File,
    Directory,
    /// Symlinks, hard links, devices and anything else the shell cannot use.
    Other,
}

/// Opaque reference to a member, valid for the source that produced it.
///
/// For tar archives this is the member's position in the archive stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberHandle(usize);

impl MemberHandle {
    pub fn new(ordinal: usize) -> Self {
        Self(ordinal)
    }

    pub fn ordinal(self) -> usize {
        self.0
    }
}

/// One entry of an archive's member list.
#[derive(Debug, Clone)]
pub struct ArchiveMember {
    /// Member name as stored in the archive (slash-separated).
    pub name: String,
    /// Kind of member.
    pub kind: MemberKind,
    /// Size in bytes (0 for directories).
    pub size: u64,
    /// Handle for [`ArchiveSource::read`].
    pub handle: MemberHandle,
}

/// A read-only archive.
///
/// The member list is read once when the namespace is built; content is read
/// on demand, one member at a time.
pub trait ArchiveSource: fmt::Debug + Send + Sync {
    /// List all members in archive order.
    fn members(&self) -> io::Result<Vec<ArchiveMember>>;

    /// Read the full content of a file member.
    fn read(&self, handle: MemberHandle) -> io::Result<Vec<u8>>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}
