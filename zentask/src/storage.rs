//! Key-value persistence
//!
//! The store holds opaque serialized strings under flat keys: one fixed
//! key for the saved session, one key per user for that user's task
//! collection. Callers treat malformed payloads as absent (fail-soft).

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;

/// Keys the application writes
pub mod keys {
    use uuid::Uuid;

    /// Saved session user
    pub const SESSION_USER: &str = "session_user";

    /// A user's serialized task collection
    pub fn tasks(user_id: &Uuid) -> String {
        format!("tasks_{}", user_id)
    }
}

/// Persistence contract: get/set/remove of serialized values
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed store, one JSON document per key
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the default data directory
    ///
    /// `ZENTASK_DATA_DIR` wins; otherwise the platform data dir, with a
    /// dotfile directory in the CWD as the last resort.
    pub fn open_default() -> Self {
        use directories::ProjectDirs;

        if let Ok(dir) = std::env::var("ZENTASK_DATA_DIR") {
            return Self::new(dir);
        }
        if let Some(proj_dirs) = ProjectDirs::from("com", "zentask", "zentask") {
            Self::new(proj_dirs.data_dir())
        } else {
            Self::new(".zentask")
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are caller-controlled identifiers; keep file names tame anyway.
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.root.join(format!("{}.json", name))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
