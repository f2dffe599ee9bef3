use serde::Serialize;

use crate::metadata::ArgValue;

/// Reserved property keys read by external reporters.
pub mod keys {
    /// Carries failure and exclusion text, rendered verbatim by reporters.
    pub const SKIP_REASON: &str = "_SKIPREASON";
    /// A fixture marker's free-form description.
    pub const DESCRIPTION: &str = "_DESCRIPTION";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyEntry {
    pub key: String,
    pub value: ArgValue,
}

/// Ordered key→value bag with unique keys.
///
/// Insertion order is preserved; inserting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PropertyBag {
    entries: Vec<PropertyEntry>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.value = value;
        } else {
            self.entries.push(PropertyEntry { key, value });
        }
    }

    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(ArgValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
