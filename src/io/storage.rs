//! Key/value persistence for the best score and mute preference
//!
//! Values are stored as strings under fixed keys, the same shape as browser
//! local storage, so a store written by older builds under the legacy best
//! score key is migrated on first read.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::io::configuration::{BEST_SCORE_KEY, LEGACY_BEST_SCORE_KEY, MUTED_KEY};
use crate::io::error::{GameError, Result};

/// String-to-string persistence backend
pub trait KeyValueStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot persist the value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Volatile store used when persistence is disabled
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a flat JSON object on disk
///
/// Every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Load a store from `path`
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object of strings
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "store file absent, starting empty");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| GameError::FileSystem {
            path: path.clone(),
            operation: "read store",
            source: e,
        })?;
        let entries = serde_json::from_str(&content).map_err(|e| GameError::StoreFormat {
            path: path.clone(),
            source: e,
        })?;

        Ok(Self { path, entries })
    }

    /// Load a store, falling back to an empty one when the file is unusable
    ///
    /// The file is left as is until the next successful write.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::open(path.clone()).unwrap_or_else(|error| {
            warn!(%error, "continuing with an empty store");
            Self {
                path,
                entries: BTreeMap::new(),
            }
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|e| GameError::StoreFormat {
                path: self.path.clone(),
                source: e,
            })?;

        fs::write(&self.path, content).map_err(|e| GameError::FileSystem {
            path: self.path.clone(),
            operation: "write store",
            source: e,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

fn parse_score(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(value = raw, "ignoring malformed best score");
        0
    })
}

/// Read the best score, migrating the legacy key when needed
///
/// The current key wins when present. Otherwise a legacy value is adopted
/// and written back under the current key. Absent or malformed values read
/// as 0, and a failed migration write only logs a warning.
pub fn load_best(store: &mut impl KeyValueStore) -> u64 {
    if let Some(raw) = store.get(BEST_SCORE_KEY) {
        return parse_score(&raw);
    }

    let Some(raw) = store.get(LEGACY_BEST_SCORE_KEY) else {
        return 0;
    };

    let best = parse_score(&raw);
    if let Err(error) = store.set(BEST_SCORE_KEY, &best.to_string()) {
        warn!(%error, "could not migrate legacy best score");
    }
    debug!(best, "migrated legacy best score");
    best
}

/// Persist the best score under the current key
///
/// # Errors
///
/// Returns an error if the store cannot persist the value
pub fn save_best(store: &mut impl KeyValueStore, best: u64) -> Result<()> {
    store.set(BEST_SCORE_KEY, &best.to_string())
}

/// Read the mute preference; anything but `"true"` means unmuted
pub fn load_muted(store: &impl KeyValueStore) -> bool {
    store.get(MUTED_KEY).is_some_and(|raw| raw.trim() == "true")
}

/// Persist the mute preference
///
/// # Errors
///
/// Returns an error if the store cannot persist the value
pub fn save_muted(store: &mut impl KeyValueStore, muted: bool) -> Result<()> {
    store.set(MUTED_KEY, if muted { "true" } else { "false" })
}
