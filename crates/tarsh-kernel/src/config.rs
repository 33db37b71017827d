//! Shell configuration file.
//!
//! ```json
//! {
//!   "archivePath": "fs.tar",
//!   "startupScriptPath": "startup.sh"
//! }
//! ```
//!
//! `tar_path` and `startup_script` are accepted as alternative key names.
//! Relative paths are taken relative to the process working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LoadError;

/// Configuration for a shell session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// Tar archive to serve as the read-only filesystem.
    #[serde(alias = "tar_path")]
    pub archive_path: PathBuf,
    /// Script run before the interactive prompt. Skipped if the file is absent.
    #[serde(alias = "startup_script")]
    pub startup_script_path: PathBuf,
}

impl ShellConfig {
    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| LoadError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
