//! Style records.
//!
//! A `StyleRecord` is the ordered key/value record the layout components
//! produce and any flexbox-capable renderer consumes. Keys collide by
//! replacement, so merging an opaque override record last gives it full
//! override power over every derived entry.

use std::borrow::Cow;

use serde::ser::{Serialize, SerializeMap, Serializer};

// =============================================================================
// Style Value
// =============================================================================

/// A single style value.
///
/// Serializes untagged: keywords and strings as JSON strings, numbers as
/// JSON numbers.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A value from the fixed style vocabulary.
    Keyword(&'static str),
    /// An arbitrary string value (sizes, override entries).
    Str(String),
    /// A numeric value (flex grow).
    Number(f64),
}

impl From<&'static str> for StyleValue {
    fn from(value: &'static str) -> Self {
        Self::Keyword(value)
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

// =============================================================================
// Style Record
// =============================================================================

/// An insertion-ordered style record.
///
/// `set` replaces the value in place when the key already exists, so the
/// record never holds duplicate keys and the last write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRecord {
    entries: Vec<(Cow<'static, str>, StyleValue)>,
}

impl StyleRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any existing value for it.
    pub fn set(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<StyleValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style `set`, for assembling override records inline.
    pub fn with(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Merge another record into this one, entry by entry.
    ///
    /// Colliding keys take the other record's value; new keys append.
    pub fn merge(&mut self, other: StyleRecord) {
        for (key, value) in other.entries {
            self.set(key, value);
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StyleRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Tests
// =============================================================================
