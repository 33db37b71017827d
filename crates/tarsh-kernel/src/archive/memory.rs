//! In-memory archive.
//!
//! Used for embedding and testing. Members are kept in insertion order, just
//! like a tar stream.

use std::io;

use super::traits::{ArchiveMember, ArchiveSource, MemberHandle, MemberKind};

#[derive(Debug, Clone)]
enum Member {
    File { name: String, data: Vec<u8> },
    Directory { name: String },
}

/// Archive whose members live in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    members: Vec<Member>,
}

impl MemoryArchive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory member.
    pub fn with_dir(mut self, name: impl Into<String>) -> Self {
        self.members.push(Member::Directory { name: name.into() });
        self
    }

    /// Append a file member.
    pub fn with_file(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.members.push(Member::File {
            name: name.into(),
            data: data.into(),
        });
        self
    }
}

impl ArchiveSource for MemoryArchive {
    fn members(&self) -> io::Result<Vec<ArchiveMember>> {
        Ok(self
            .members
            .iter()
            .enumerate()
            .map(|(ordinal, member)| match member {
                Member::File { name, data } => ArchiveMember {
                    name: name.clone(),
                    kind: MemberKind::File,
                    size: data.len() as u64,
                    handle: MemberHandle::new(ordinal),
                },
                Member::Directory { name } => ArchiveMember {
                    name: name.clone(),
                    kind: MemberKind::Directory,
                    size: 0,
                    handle: MemberHandle::new(ordinal),
                },
            })
            .collect())
    }

    fn read(&self, handle: MemberHandle) -> io::Result<Vec<u8>> {
        match self.members.get(handle.ordinal()) {
            Some(Member::File { data, .. }) => Ok(data.clone()),
            Some(Member::Directory { name }) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("is a directory: {name}"),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no member #{}", handle.ordinal()),
            )),
        }
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
