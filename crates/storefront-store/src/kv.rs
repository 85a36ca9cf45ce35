//! # Key/Value Backends
//!
//! The storefront keeps its local data the way a browser keeps
//! `localStorage`: string values under string keys. Repositories sit on top
//! of the [`KeyValueStore`] trait and never see which backend is in use.
//!
//! ```text
//! ┌──────────────────────┐      ┌───────────────────────────────────────┐
//! │  UserRepository      │      │  KeyValueStore (trait)                │
//! │  ProductRepository   │─────►│  ├── MemoryStore  (tests)             │
//! │  PreferenceRepository│      │  └── FileStore    (storage.json)      │
//! └──────────────────────┘      └───────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::error::StoreResult;

/// String-keyed storage for string values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// Volatile store; contents are gone when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .lock()?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.lock()?.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Store
// =============================================================================

/// Persistent store backed by a single JSON object on disk.
///
/// The whole file is loaded at open and rewritten after every change. Writes
/// go to a sibling temp file first and are renamed into place; the cached
/// entries only change once that succeeds.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Default file name inside the data directory.
    pub const FILE_NAME: &'static str = "storage.json";

    /// Opens (or starts) the store at `path`, creating parent directories.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            BTreeMap::new()
        };

        info!(path = %path.display(), keys = entries.len(), "Opened file store");

        Ok(FileStore {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Opens `storage.json` inside `dir`.
    pub fn open_in(dir: &Path) -> StoreResult<Self> {
        FileStore::open(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = entries.len(), "Persisted file store");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock()?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock()?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}
