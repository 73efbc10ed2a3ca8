use crate::store::error::{Result as StoreResult, StoreError};
use crate::store::CredentialStore;

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// JSON key/value credential file with atomic writes.
///
/// A flat map of string keys persisted under the app data directory.
/// Writes go through a temp file, fsync and rename so a crash mid-write
/// never corrupts stored credentials. A corrupted file is backed up and
/// treated as empty rather than blocking startup.
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    /// Open a store at `path`, creating parent directories as needed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::dir_creation(parent.to_path_buf(), e))?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::file_read(self.path.clone(), e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!("Credential file corrupted at {:?}: {e}", self.path);
                self.backup_corrupted();
                Ok(BTreeMap::new())
            }
        }
    }

    /// Writes the whole map using the atomic write pattern:
    ///
    /// 1. Write to temp file
    /// 2. Sync to disk (fsync)
    /// 3. Atomic rename to final location
    fn save(&self, map: &BTreeMap<String, String>) -> StoreResult<()> {
        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(map)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }

    /// Renames the unreadable file aside for debugging; best-effort.
    fn backup_corrupted(&self) {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .path
            .with_extension(format!("corrupted.{timestamp}"));

        match fs::rename(&self.path, &backup_path) {
            Ok(()) => warn!("Backed up corrupted credential file to {backup_path:?}"),
            Err(e) => warn!("Failed to back up corrupted credential file: {e}"),
        }
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut map = self.load()?;

        if map.remove(key).is_some() {
            self.save(&map)?;
            info!("Removed credential key '{key}'");
        }

        Ok(())
    }
}
