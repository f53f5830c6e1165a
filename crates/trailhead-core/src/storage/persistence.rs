//! Settings persistence
//!
//! Handles saving and loading settings documents to/from the filesystem as
//! JSON, one file per settings key. Uses atomic writes (write to temp file,
//! then rename) so a crashed or failed save never leaves a torn file.
//!
//! Storage location: `~/.local/share/trailhead/` (configurable via `Config`)

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::error::{StorageError, StorageResult};

/// Persistence boundary for settings and record documents
///
/// The store holds opaque JSON-compatible values keyed by a settings key;
/// interpreting the value is the caller's business. `load` returns `None`
/// when nothing has been stored under the key yet.
pub trait RecordStore {
    /// Load the value stored under `key`, if any
    fn load(&self, key: &str) -> StorageResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &Value) -> StorageResult<()>;
}

/// File-backed record store: one pretty-printed JSON file per key
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The file a key is stored in
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Check if a value exists for the key
    pub fn exists(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self, key: &str) -> StorageResult<Option<Value>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| StorageError::from_io(e, path.clone()))?;
        let value =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::InvalidFormat {
                path,
                source,
            })?;

        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &Value) -> StorageResult<()> {
        let path = self.path_for(key);

        let mut bytes =
            serde_json::to_vec_pretty(value).map_err(|source| StorageError::InvalidFormat {
                path: path.clone(),
                source,
            })?;
        bytes.push(b'\n');

        atomic_write(&path, &bytes)
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
