//! Tar archive on disk.
//!
//! The file is opened once to list members and reopened for every content
//! read; a handle is the member's position in the stream, so a read walks the
//! archive up to that position. Gzip-compressed archives are recognized by
//! their magic bytes.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use flate2::read::GzDecoder;
use tar::EntryType;

use super::traits::{ArchiveMember, ArchiveSource, MemberHandle, MemberKind};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Tar archive backed by a file.
#[derive(Debug, Clone)]
pub struct TarArchive {
    path: PathBuf,
}

impl TarArchive {
    /// Open an archive, checking that the file is readable.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        File::open(&path)?;
        Ok(Self { path })
    }

    /// Open a fresh tar reader over the file, decompressing if needed.
    fn reader(&self) -> io::Result<tar::Archive<Box<dyn Read>>> {
        let mut file = BufReader::new(File::open(&self.path)?);
        let mut magic = [0u8; 2];
        let gzipped = match file.read_exact(&mut magic) {
            Ok(()) => magic == GZIP_MAGIC,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => false,
            Err(e) => return Err(e),
        };

        // Rewind by reopening; BufReader cannot un-read.
        let file = BufReader::new(File::open(&self.path)?);
        let stream: Box<dyn Read> = if gzipped {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };
        Ok(tar::Archive::new(stream))
    }
}

fn member_kind(entry_type: EntryType) -> MemberKind {
    match entry_type {
        EntryType::Directory => MemberKind::Directory,
        EntryType::Regular | EntryType::Continuous => MemberKind::File,
        _ => MemberKind::Other,
    }
}

impl ArchiveSource for TarArchive {
    fn members(&self) -> io::Result<Vec<ArchiveMember>> {
        let mut archive = self.reader()?;
        let mut members = Vec::new();
        for (ordinal, entry) in archive.entries()?.enumerate() {
            let entry = entry?;
            let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            let kind = member_kind(entry.header().entry_type());
            members.push(ArchiveMember {
                name,
                kind,
                size: if kind == MemberKind::File { entry.size() } else { 0 },
                handle: MemberHandle::new(ordinal),
            });
        }
        Ok(members)
    }

    fn read(&self, handle: MemberHandle) -> io::Result<Vec<u8>> {
        let mut archive = self.reader()?;
        let mut entry = archive
            .entries()?
            .nth(handle.ordinal())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("archive member #{} is missing", handle.ordinal()),
                )
            })??;

        if member_kind(entry.header().entry_type()) != MemberKind::File {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("archive member #{} is not a regular file", handle.ordinal()),
            ));
        }

        let mut data = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
        entry.read_to_end(&mut data)?;
        Ok(data)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
