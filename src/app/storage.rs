// SPDX-License-Identifier: MPL-2.0
//! Local key-value storage persisted as CBOR.
//!
//! Holds the stored interface language (`uiLanguage`) and the per-card
//! difficulty ratings written by [`crate::feedback`]. Values are plain
//! strings; callers decide how to encode them.
//!
//! Load and save never fail hard: problems are reported as a [`UiKey`]
//! warning so the caller can show a toast and carry on with what it has.

use super::paths;
use crate::feedback::KeyValueStore;
use crate::i18n::UiKey;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.cbor";

/// Key under which the interface language tag is stored.
pub const UI_LANGUAGE_KEY: &str = "uiLanguage";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalStorage {
    entries: BTreeMap<String, String>,
    /// Data directory override; `None` uses [`paths::get_app_data_dir`].
    base_dir: Option<PathBuf>,
}

impl LocalStorage {
    /// Loads storage from the default location.
    pub fn load() -> (Self, Option<UiKey>) {
        Self::load_from(None)
    }

    /// Loads storage from `base_dir` (or the default data directory).
    ///
    /// A missing file is an empty store. An unreadable or corrupt file also
    /// yields an empty store, plus a warning.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<UiKey>) {
        let mut storage = Self {
            entries: BTreeMap::new(),
            base_dir: base_dir.clone(),
        };
        let Some(path) = storage_file_path(base_dir) else {
            return (storage, None);
        };

        if !path.exists() {
            return (storage, None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(entries) => {
                    storage.entries = entries;
                    (storage, None)
                }
                Err(err) => {
                    log::warn!("Ignoring corrupt storage file {}: {err}", path.display());
                    (storage, Some(UiKey::ErrorsStorageRead))
                }
            },
            Err(err) => {
                log::warn!("Cannot open storage file {}: {err}", path.display());
                (storage, Some(UiKey::ErrorsStorageRead))
            }
        }
    }

    /// Writes every entry back to disk, creating the directory if needed.
    pub fn save(&self) -> Option<UiKey> {
        let Some(path) = storage_file_path(self.base_dir.clone()) else {
            return Some(UiKey::ErrorsStorageWrite);
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::error!("Cannot create {}: {err}", parent.display());
                return Some(UiKey::ErrorsStorageWrite);
            }
        }

        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(err) => {
                log::error!("Cannot create {}: {err}", path.display());
                return Some(UiKey::ErrorsStorageWrite);
            }
        };
        if let Err(err) = ciborium::into_writer(&self.entries, BufWriter::new(file)) {
            log::error!("Cannot write {}: {err}", path.display());
            return Some(UiKey::ErrorsStorageWrite);
        }
        None
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

fn storage_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STORAGE_FILE);
        path
    })
}
