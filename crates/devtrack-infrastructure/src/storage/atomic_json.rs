//! Atomic JSON file operations.
//!
//! A slot file is always replaced whole: writes go to a uniquely named temp
//! file that is synced and renamed over the target, under an exclusive lock
//! file.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicJsonError::JsonError(e) => write!(f, "JSON error: {}", e),
            AtomicJsonError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::IoError(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::JsonError(e)
    }
}

/// A handle to a JSON file that is replaced atomically on every save.
///
/// Provides:
/// - **Atomicity**: tmp file + rename, readers never see a half-written file
/// - **Isolation**: an exclusive lock file serializes concurrent writers
/// - **Durability**: explicit fsync before rename
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is blank
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Serializes `data` and replaces the file with it.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(data)?;

        let _lock = FileLock::acquire(&self.path)?;

        let mut tmp_file = NamedTempFile::new_in(self.dir())?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.as_file().sync_all()?;
        tmp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }

    /// Directory holding the slot, where temp files are created so the
    /// final rename never crosses filesystems.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

/// Exclusive lock on `<slot>.lock`, released when the handle closes.
///
/// The lock file is never removed: a writer blocked on it must end up
/// holding the same inode that later writers will lock.
struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicJsonError::LockError(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file })
    }
}
