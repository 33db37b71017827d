//! Archive sources for the namespace.
//!
//! An archive is a flat list of members, each with a name and a kind, plus a
//! way to fetch a member's bytes later:
//!
//! - **TarArchive**: a tar file on disk, optionally gzip-compressed
//! - **MemoryArchive**: members held in memory (embedding, tests)
//!
//! Both implement [`ArchiveSource`]; the namespace only ever talks to the trait.

mod memory;
mod tarball;
mod traits;

pub use memory::MemoryArchive;
pub use tarball::TarArchive;
pub use traits::{ArchiveMember, ArchiveSource, MemberHandle, MemberKind};
