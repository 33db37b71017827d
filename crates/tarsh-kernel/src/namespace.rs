//! The virtual namespace: archive entries plus session-created directories.
//!
//! # Design
//!
//! There is no tree. A path exists if its key is a member of one of two flat
//! collections:
//!
//! ```text
//! ArchiveIndex (shared, read-only)     created (per session)
//! ├── "file1.txt"   file               ├── "new_folder"
//! ├── "docs"        dir                └── "docs/drafts"
//! └── "docs/a.md"   file
//! ```
//!
//! The two never share a key. Children of a directory are the keys whose
//! [`paths::parent`] equals it, archive entries first (archive order), then
//! created directories (creation order).

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::archive::{ArchiveSource, MemberHandle, MemberKind};
use crate::error::{KeyExists, VfsError};
use crate::paths::{self, ROOT};

/// What a key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryClass {
    None,
    ArchiveDir,
    ArchiveFile,
    CreatedDir,
}

#[derive(Debug, Clone, Copy)]
enum EntryKind {
    Directory,
    File(MemberHandle),
}

/// Index of an archive's members by key.
///
/// Built once; never mutated afterwards, so it can be shared between sessions.
pub struct ArchiveIndex {
    source: Box<dyn ArchiveSource>,
    entries: IndexMap<String, EntryKind>,
}

impl ArchiveIndex {
    /// Read the member list of `source` and index it.
    pub fn load(source: impl ArchiveSource + 'static) -> std::io::Result<Self> {
        let members = source.members()?;
        let mut entries = IndexMap::with_capacity(members.len());
        let mut file_bytes = 0u64;

        for member in members {
            let key = paths::resolve(ROOT, &member.name);
            if key.is_empty() {
                continue;
            }
            let kind = match member.kind {
                MemberKind::Directory => EntryKind::Directory,
                MemberKind::File => {
                    file_bytes += member.size;
                    EntryKind::File(member.handle)
                }
                MemberKind::Other => {
                    tracing::debug!("skipping unsupported archive member {}", member.name);
                    continue;
                }
            };
            entries.insert(key, kind);
        }

        tracing::debug!(
            "indexed {} entries ({} bytes of file content) from {}",
            entries.len(),
            file_bytes,
            source.location()
        );

        Ok(Self {
            source: Box::new(source),
            entries,
        })
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the archive has no usable entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get(&self, key: &str) -> Option<EntryKind> {
        self.entries.get(key).copied()
    }
}

impl fmt::Debug for ArchiveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchiveIndex")
            .field("source", &self.source)
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Archive entries plus the directories created in this session.
#[derive(Debug)]
pub struct VirtualNamespace {
    archive: Arc<ArchiveIndex>,
    created: IndexSet<String>,
}

impl VirtualNamespace {
    /// Create a namespace over a (possibly shared) archive index.
    pub fn new(archive: Arc<ArchiveIndex>) -> Self {
        Self {
            archive,
            created: IndexSet::new(),
        }
    }

    /// Load `source` and create a namespace over it.
    pub fn load(source: impl ArchiveSource + 'static) -> std::io::Result<Self> {
        Ok(Self::new(Arc::new(ArchiveIndex::load(source)?)))
    }

    /// The shared archive index.
    pub fn archive(&self) -> &Arc<ArchiveIndex> {
        &self.archive
    }

    /// Classify a key: archive first, then created directories.
    pub fn classify(&self, key: &str) -> EntryClass {
        match self.archive.get(key) {
            Some(EntryKind::Directory) => EntryClass::ArchiveDir,
            Some(EntryKind::File(_)) => EntryClass::ArchiveFile,
            None if self.created.contains(key) => EntryClass::CreatedDir,
            None => EntryClass::None,
        }
    }

    /// True for the root and for any archive or created directory.
    pub fn is_directory(&self, key: &str) -> bool {
        key == ROOT
            || matches!(
                self.classify(key),
                EntryClass::ArchiveDir | EntryClass::CreatedDir
            )
    }

    /// Add a session directory. Nothing changes if the key is already taken.
    pub fn create_directory(&mut self, key: &str) -> Result<(), KeyExists> {
        if key == ROOT || self.classify(key) != EntryClass::None {
            return Err(KeyExists {
                key: key.to_string(),
            });
        }
        self.created.insert(key.to_string());
        tracing::debug!("created directory {}", paths::display(key));
        Ok(())
    }

    /// Names of the direct children of `dir`.
    pub fn list_children(&self, dir: &str) -> Vec<&str> {
        self.archive
            .entries
            .keys()
            .chain(self.created.iter())
            .filter(|key| paths::parent(key) == dir)
            .map(|key| paths::base_name(key))
            .collect()
    }

    /// Read an archive file's content.
    pub fn read_file(&self, key: &str) -> Result<Vec<u8>, VfsError> {
        let Some(EntryKind::File(handle)) = self.archive.get(key) else {
            return Err(VfsError::NotAFile {
                key: key.to_string(),
            });
        };
        self.archive.source.read(handle).map_err(|source| {
            tracing::warn!("archive read of {} failed: {}", paths::display(key), source);
            VfsError::Read {
                key: key.to_string(),
                source,
            }
        })
    }

    /// Directories created so far, in creation order.
    pub fn created_directories(&self) -> impl Iterator<Item = &str> {
        self.created.iter().map(String::as_str)
    }
}
