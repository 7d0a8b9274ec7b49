//! File-backed [`InputStore`] persisting raw input text as a flat TOML table.
//!
//! ```toml
//! businessCost = "0"
//! salary = "3,000,000"
//! ```
//!
//! The whole table is read once on open and rewritten on every `set`.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tax_core::{InputStore, StoreError};
use tracing::debug;

pub struct TomlFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlFileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is treated as an empty store and is created on the
    /// first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let values = match fs::read_to_string(&path) {
            Ok(contents) => {
                toml::from_str(&contents).map_err(|e| StoreError::Decode(e.to_string()))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "input store not found, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(Self { path, values })
    }

    /// A store at `path` that ignores whatever the file holds now.
    ///
    /// Used when [`open`](Self::open) fails; the first `set` replaces the
    /// file.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(
        &self,
        values: &BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        let contents = toml::to_string(values).map_err(|e| StoreError::Encode(e.to_string()))?;

        // Write beside the target, then rename over it.
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, contents)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Io(e));
        }

        debug!(path = %self.path.display(), keys = values.len(), "input store written");
        Ok(())
    }
}

impl InputStore for TomlFileStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), value.to_string());

        self.persist(&values)?;
        self.values = values;
        Ok(())
    }
}
