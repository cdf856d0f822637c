//! File-backed persistence area.
//!
//! Each key is stored as `<dir>/<key>.json`. Writes land in a sibling
//! `<key>.json.tmp` first and are renamed into place, so a reader never
//! observes a half-written value.
//!
//! Several processes may open the same directory. They are not
//! coordinated: a write from one is only seen by another on its next read.

use crate::{
    FILE_EXTENSION, KeyValueStore, Result as StorageErrorResult, StorageError, TEMP_SUFFIX,
};

use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::{debug, trace};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    #[track_caller]
    pub fn path_for(&self, key: &str) -> StorageErrorResult<PathBuf> {
        Self::check_key(key)?;
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }

    /// Keys map straight to file names, so only `[A-Za-z0-9_-]` is allowed.
    #[track_caller]
    fn check_key(key: &str) -> StorageErrorResult<()> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
                message: "key cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
                message: "only ASCII letters, digits, '_' and '-' are allowed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    #[track_caller]
    fn ensure_dir(&self) -> StorageErrorResult<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;
            debug!("Created profile directory {}", self.dir.display());
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    #[track_caller]
    fn get(&self, key: &str) -> StorageErrorResult<Option<String>> {
        let path = self.path_for(key)?;

        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    #[track_caller]
    fn set(&self, key: &str, value: &str) -> StorageErrorResult<()> {
        let path = self.path_for(key)?;
        self.ensure_dir()?;

        let temp_path = path.with_extension(format!("{FILE_EXTENSION}.{TEMP_SUFFIX}"));
        std::fs::write(&temp_path, value).map_err(|e| StorageError::io(&temp_path, e))?;
        std::fs::rename(&temp_path, &path).map_err(|e| StorageError::io(&path, e))?;

        trace!("Wrote {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    #[track_caller]
    fn remove(&self, key: &str) -> StorageErrorResult<()> {
        let path = self.path_for(key)?;

        match std::fs::remove_file(&path) {
            Ok(()) => {
                trace!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }
}
