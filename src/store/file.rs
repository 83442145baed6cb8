//! Blob store backed by one JSON file per key.
//!
//! Writes go to a temporary file in the same directory which is then renamed
//! over the target, so a reader never sees a half-written blob. An advisory
//! lock on a sibling `.lock` file is held for the duration of the write.

use crate::constants::{BLOB_FILE_EXTENSION, LOCK_FILE_EXTENSION};
use crate::errors::{AppError, AppResult, LockError, StoreError};
use crate::store::BlobStore;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Ensures the data directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails due to permission issues,
///   invalid paths, or other filesystem errors
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            let permissions =
                fs::Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to set secure permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBlobStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, BLOB_FILE_EXTENSION))
    }

    fn lock_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, LOCK_FILE_EXTENSION))
    }

    fn acquire_lock(&self, key: &str) -> Result<File, LockError> {
        let path = self.lock_path_for(key);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: path.clone(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(file),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(LockError::FileBusy { path })
            }
            Err(source) => Err(LockError::AcquisitionFailed { path, source }),
        }
    }

    fn write_atomically(&self, key: &str, blob: &str) -> io::Result<()> {
        let target = self.path_for(key);
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(blob.as_bytes())?;
        temp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            let permissions =
                fs::Permissions::from_mode(crate::constants::DEFAULT_FILE_PERMISSIONS);
            temp.as_file().set_permissions(permissions)?;
        }

        temp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::LoadFailure {
                key: key.to_string(),
                message: format!("{}: {}", path.display(), e),
            }),
        }
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        let lock = self.acquire_lock(key)?;
        let result = self.write_atomically(key, blob);
        if let Err(e) = lock.unlock() {
            warn!(
                "Failed to release lock {:?}, it is released when the handle closes: {}",
                self.lock_path_for(key),
                e
            );
        }

        result.map_err(|source| StoreError::PersistFailure {
            key: key.to_string(),
            source,
        })?;
        debug!("Wrote {} bytes to {:?}", blob.len(), self.path_for(key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_key_is_none() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let store = FileBlobStore::new(temp_dir.path());

        assert!(store.read("journalEntries").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let mut store = FileBlobStore::new(temp_dir.path());

        store.write("journalEntries", "[]").unwrap();
        store.write("journalEntries", "[1]").unwrap();

        assert_eq!(store.read("journalEntries").unwrap().as_deref(), Some("[1]"));
        assert!(temp_dir.path().join("journalEntries.json").exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_written_blob_permissions() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let mut store = FileBlobStore::new(temp_dir.path());

        store.write("journalEntries", "[]").unwrap();

        let mode = fs::metadata(store.path_for("journalEntries"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_write_into_missing_directory_fails_to_lock() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let mut store = FileBlobStore::new(temp_dir.path().join("missing"));

        let result = store.write("journalEntries", "[]");

        assert!(matches!(
            result,
            Err(StoreError::Lock(LockError::AcquisitionFailed { .. }))
        ));
    }

    #[test]
    fn test_write_while_locked_is_busy() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let mut store = FileBlobStore::new(temp_dir.path());
        let held = store.acquire_lock("journalEntries").unwrap();

        let result = store.write("journalEntries", "[]");

        assert!(matches!(
            result,
            Err(StoreError::Lock(LockError::FileBusy { .. }))
        ));
        held.unlock().unwrap();
        assert!(store.write("journalEntries", "[]").is_ok());
    }

    #[test]
    fn test_write_releases_lock_afterwards() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let mut store = FileBlobStore::new(temp_dir.path());

        store.write("journalEntries", "[]").unwrap();

        let relock = store.acquire_lock("journalEntries");
        assert!(relock.is_ok());
        relock.unwrap().unlock().unwrap();
    }

    #[test]
    fn test_ensure_data_directory_exists_creates_directory() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let data_dir = temp_dir.path().join("nested").join("moodlog");

        ensure_data_directory_exists(&data_dir).unwrap();

        assert!(data_dir.is_dir());
    }

    #[test]
    fn test_ensure_data_directory_exists_rejects_relative_path() {
        let result = ensure_data_directory_exists(Path::new("relative/dir"));

        match result {
            Err(AppError::Journal(msg)) => assert!(msg.contains("must be absolute")),
            _ => panic!("Expected Journal error for relative path"),
        }
    }
}
