//! Test utilities for tarsh.
//!
//! Builds the on-disk inputs a tarsh session starts from, inside a temporary
//! directory that is removed on drop:
//!
//! - tar and tar.gz archives from a list of [`Entry`] values
//! - startup scripts
//! - JSON config files pointing at both

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// A member to put into a test archive.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Dir(&'a str),
    File(&'a str, &'a [u8]),
    Symlink(&'a str, &'a str),
}

/// A temporary directory holding archives, scripts and configs.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Create an empty fixture directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Root of the fixture directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a plain tar archive.
    pub fn tar(&self, name: &str, entries: &[Entry<'_>]) -> io::Result<PathBuf> {
        let path = self.path().join(name);
        let mut builder = tar::Builder::new(fs::File::create(&path)?);
        append_entries(&mut builder, entries)?;
        builder.into_inner()?.flush()?;
        Ok(path)
    }

    /// Write a gzip-compressed tar archive.
    pub fn tar_gz(&self, name: &str, entries: &[Entry<'_>]) -> io::Result<PathBuf> {
        let path = self.path().join(name);
        let encoder = GzEncoder::new(fs::File::create(&path)?, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        append_entries(&mut builder, entries)?;
        builder.into_inner()?.finish()?.flush()?;
        Ok(path)
    }

    /// Write a text file (startup scripts, broken configs).
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> io::Result<PathBuf> {
        let path = self.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a config file pointing at `archive` and `script`.
    pub fn config(&self, name: &str, archive: &Path, script: &Path) -> io::Result<PathBuf> {
        let json = serde_json::json!({
            "archivePath": archive,
            "startupScriptPath": script,
        });
        self.write(name, json.to_string())
    }

    /// Overwrite a file in place with bytes that are not a tar stream.
    pub fn corrupt(&self, path: &Path) -> io::Result<()> {
        fs::write(path, vec![0xABu8; 1024])
    }
}

fn append_entries<W: Write>(builder: &mut tar::Builder<W>, entries: &[Entry<'_>]) -> io::Result<()> {
    for entry in entries {
        let mut header = tar::Header::new_gnu();
        header.set_mtime(0);
        match *entry {
            Entry::Dir(name) => {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_mode(0o755);
                header.set_size(0);
                builder.append_data(&mut header, name, io::empty())?;
            }
            Entry::File(name, data) => {
                header.set_entry_type(tar::EntryType::Regular);
                header.set_mode(0o644);
                header.set_size(data.len() as u64);
                builder.append_data(&mut header, name, data)?;
            }
            Entry::Symlink(name, target) => {
                header.set_entry_type(tar::EntryType::Symlink);
                header.set_mode(0o777);
                header.set_size(0);
                builder.append_link(&mut header, name, target)?;
            }
        }
    }
    builder.finish()
}
