//! Persistence of the dark-mode flag.
//!
//! Stores hold raw string values by key, the way browser local storage
//! does, and the flag is written as a JSON boolean (`"true"` / `"false"`).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::PreferenceError;
use crate::consts::PREFERENCE_KEY;

/// Key-value boundary the form persists its dark-mode flag through.
pub trait PreferenceStore {
    /// Reads the stored flag; `Ok(None)` if nothing was stored yet
    ///
    /// # Errors
    /// Returns `PreferenceError` if the backing storage cannot be read or
    /// the stored value is not a JSON boolean.
    fn read(&self) -> Result<Option<bool>, PreferenceError>;

    /// Stores the flag, replacing any earlier value
    ///
    /// # Errors
    /// Returns `PreferenceError` if the backing storage cannot be written.
    fn write(&mut self, dark_mode: bool) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn read(&self) -> Result<Option<bool>, PreferenceError> {
        (**self).read()
    }

    fn write(&mut self, dark_mode: bool) -> Result<(), PreferenceError> {
        (**self).write(dark_mode)
    }
}

fn decode(key: &str, raw: &str) -> Result<bool, PreferenceError> {
    serde_json::from_str(raw).map_err(|source| PreferenceError::Decode {
        key: key.to_owned(),
        source,
    })
}

fn encode(dark_mode: bool) -> Result<String, PreferenceError> {
    serde_json::to_string(&dark_mode).map_err(PreferenceError::Encode)
}

/// In-memory store, mostly useful for tests and embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    key: String,
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: BTreeMap::new(),
        }
    }

    /// A store already holding `raw` under its key
    pub fn with_raw(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let mut store = Self::new(key);
        store.entries.insert(store.key.clone(), raw.into());
        store
    }

    /// The raw stored string, if any
    pub fn raw(&self) -> Option<&str> {
        self.entries.get(&self.key).map(String::as_str)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(PREFERENCE_KEY)
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> Result<Option<bool>, PreferenceError> {
        self.raw().map(|raw| decode(&self.key, raw)).transpose()
    }

    fn write(&mut self, dark_mode: bool) -> Result<(), PreferenceError> {
        let raw = encode(dark_mode)?;
        debug!(key = %self.key, value = %raw, "Stored preference");
        self.entries.insert(self.key.clone(), raw);
        Ok(())
    }
}

/// Store backed by a JSON object file, e.g. `{"darkMode": "true"}`.
/// Other keys in the file are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&text).map_err(|source| PreferenceError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn read(&self) -> Result<Option<bool>, PreferenceError> {
        self.load()?
            .get(&self.key)
            .map(|raw| decode(&self.key, raw))
            .transpose()
    }

    fn write(&mut self, dark_mode: bool) -> Result<(), PreferenceError> {
        let mut entries = self.load()?;
        let raw = encode(dark_mode)?;
        debug!(path = %self.path.display(), key = %self.key, value = %raw, "Stored preference");
        entries.insert(self.key.clone(), raw);

        let text = serde_json::to_string_pretty(&entries).map_err(PreferenceError::Encode)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
