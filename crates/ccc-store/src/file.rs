//! File-backed key-value storage.
//!
//! Each key is stored as `{dir}/{key}.json`. The directory is created on the
//! first write, so a fresh install reads every key as missing. Writes go to a
//! sibling `.{key}.json.tmp` that is renamed over the target, so an
//! interrupted write never leaves a half-written value behind.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::KeyValueStore;
use crate::error::StoreError;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn staging_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let staging = self.staging_path_for(key);
        std::fs::write(&staging, value)?;
        if let Err(error) = std::fs::rename(&staging, self.path_for(key)) {
            let _ = std::fs::remove_file(&staging);
            return Err(error.into());
        }
        Ok(())
    }
}
