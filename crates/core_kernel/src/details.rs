//! Ordered key-value views of entities
//!
//! Each entity renders its state as a [`Details`] mapping whose keys keep
//! the order they were inserted in, both when printed and when serialized.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Marker rendered for optional values that have not been set
pub const NOT_SET: &str = "N/A";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp the way detail mappings display it
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// A single value in a detail mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Text(String),
    List(Vec<String>),
}

impl DetailValue {
    /// Returns the text, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DetailValue::Text(text) => Some(text),
            DetailValue::List(_) => None,
        }
    }

    /// Returns the items, if this is a list value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DetailValue::Text(_) => None,
            DetailValue::List(items) => Some(items),
        }
    }
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::Text(text) => f.write_str(text),
            DetailValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl Serialize for DetailValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DetailValue::Text(text) => serializer.serialize_str(text),
            DetailValue::List(items) => items.serialize(serializer),
        }
    }
}

impl From<String> for DetailValue {
    fn from(text: String) -> Self {
        DetailValue::Text(text)
    }
}

impl From<&str> for DetailValue {
    fn from(text: &str) -> Self {
        DetailValue::Text(text.to_string())
    }
}

impl From<Vec<String>> for DetailValue {
    fn from(items: Vec<String>) -> Self {
        DetailValue::List(items)
    }
}

/// An insertion-ordered mapping of detail keys to values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details {
    entries: Vec<(String, DetailValue)>,
}

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, replacing the value of an existing key in place
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DetailValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&DetailValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns the text stored under `key`, if any
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(DetailValue::as_text)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DetailValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

impl Serialize for Details {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
