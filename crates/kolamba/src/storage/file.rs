//! File-backed key-value store
//!
//! Each key is one file under a root directory: `<root>/<key>.json`.

use super::KeyValueStore;
use crate::config::app::NAME;
use crate::config::storage::FILE_EXTENSION;
use crate::error::{AppError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir().map(|p| p.join(NAME)).ok_or_else(|| {
        AppError::Config(
            "Could not determine config directory. HOME environment variable may not be set."
                .to_string(),
        )
    })
}

/// Key-value store keeping one file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`
    ///
    /// The directory is created on first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store rooted at the default config directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(config_dir()?))
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    ///
    /// Keys must be a single non-empty path component.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, FILE_EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(file_error(FileOp::Read, &path, e)),
        };

        // Empty file is treated as non-existent
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)
            .map_err(|e| file_error(FileOp::CreateDir, &self.root, e))?;
        fs::write(&path, value).map_err(|e| file_error(FileOp::Write, &path, e))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()), // Already gone
            Err(e) => Err(file_error(FileOp::Delete, &path, e)),
        }
    }
}

fn validate_key(key: &str) -> Result<()> {
    let invalid = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);

    if invalid {
        return Err(AppError::Storage(format!("Invalid storage key {:?}", key)));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum FileOp {
    Read,
    Write,
    Delete,
    CreateDir,
}

impl FileOp {
    fn verb(self) -> &'static str {
        match self {
            FileOp::Read => "read",
            FileOp::Write => "write to",
            FileOp::Delete => "delete",
            FileOp::CreateDir => "create directory",
        }
    }
}

/// Turn an I/O failure into a storage error naming the path
fn file_error(op: FileOp, path: &Path, e: std::io::Error) -> AppError {
    let verb = op.verb();
    let msg = match e.kind() {
        ErrorKind::PermissionDenied => format!("Permission denied: cannot {} {:?}", verb, path),
        ErrorKind::NotFound => format!("Cannot {} {:?}: parent path does not exist", verb, path),
        ErrorKind::ReadOnlyFilesystem => {
            format!("Cannot {} {:?}: filesystem is read-only", verb, path)
        }
        _ => format!("Failed to {} {:?}: {}", verb, path, e),
    };
    AppError::Storage(msg)
}
