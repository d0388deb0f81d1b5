// SPDX-License-Identifier: MPL-2.0
//! Locale tables loaded from JSON files.
//!
//! - [`UiStrings`]: nested object of interface strings, flattened once into
//!   dotted paths so lookups are a single hash probe.
//! - [`FlatTable`]: flat `key -> string` object, used for per-word
//!   definitions and per-category names.

use super::UiKey;
use crate::error::Result;
use serde_json::Value;
use std::collections::HashMap;

/// What a lookup returns when the table has no entry for the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Return the dotted key path itself, so the gap is visible on screen.
    #[default]
    Key,
    /// Return an empty string.
    Empty,
}

impl Fallback {
    fn apply(self, path: &str) -> String {
        match self {
            Fallback::Key => path.to_string(),
            Fallback::Empty => String::new(),
        }
    }
}

/// Interface strings for one UI language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiStrings {
    entries: HashMap<String, String>,
}

impl UiStrings {
    /// Parses a nested JSON object of strings.
    ///
    /// Only string leaves are kept; numbers, arrays and nulls are ignored.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let root: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_value(&root))
    }

    pub fn from_value(root: &Value) -> Self {
        let mut entries = HashMap::new();
        flatten(root, &mut String::new(), &mut entries);
        Self { entries }
    }

    /// Looks up an arbitrary dotted path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn lookup(&self, key: UiKey, fallback: Fallback) -> String {
        self.lookup_path(key.path(), fallback)
    }

    fn lookup_path(&self, path: &str, fallback: Fallback) -> String {
        match self.get(path) {
            Some(value) => value.to_string(),
            None => fallback.apply(path),
        }
    }

    /// Keys the application renders that this table does not define.
    #[must_use]
    pub fn missing_keys(&self) -> Vec<UiKey> {
        UiKey::ALL
            .into_iter()
            .filter(|key| !self.entries.contains_key(key.path()))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(value: &Value, prefix: &mut String, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (segment, child) in map {
                let restore = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(segment);
                flatten(child, prefix, out);
                prefix.truncate(restore);
            }
        }
        Value::String(text) if !prefix.is_empty() => {
            out.insert(prefix.clone(), text.clone());
        }
        _ => {}
    }
}

/// A flat `key -> translated string` table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatTable {
    entries: HashMap<String, String>,
}

impl FlatTable {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_slice(bytes)?;
        Ok(Self { entries })
    }

    /// Returns the translation for `key`, or `original` when there is none.
    ///
    /// Empty translations count as missing.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, original: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(value) if !value.is_empty() => value.as_str(),
            _ => original,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
