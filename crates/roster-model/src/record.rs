//! Untyped spreadsheet rows.
//!
//! A [`RawRow`] is what the CSV parser emits: positional cells with no
//! meaning attached. A [`Record`] pairs those cells with normalized header
//! keys so fields can be looked up by name. The untyped shape stops here;
//! everything downstream works with [`crate::Member`].

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One parsed CSV row, one cell per column.
pub type RawRow = Vec<String>;

/// A spreadsheet row keyed by normalized header.
///
/// Keys are unique and keep the header order of the source sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value under `key`.
    ///
    /// Empty keys are ignored. When the key already exists, the stored value
    /// is only replaced if it is blank, so the first non-empty cell wins.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, current)) => {
                if current.trim().is_empty() {
                    *current = value;
                }
            }
            None => self.fields.push((key, value)),
        }
    }

    /// Returns the raw value for `key`, if the column exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(existing, _)| existing == key)
    }

    /// Iterates over `(key, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true when every value is blank.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.trim().is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
