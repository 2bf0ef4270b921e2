//! Header-keyed sheet rows
//!
//! A [`Record`] is one row of a roster tab keyed by its header cell. Typed
//! models are parsed from records at the store boundary and never look at
//! raw cells again.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, RosterError};
use crate::tags::TagSet;

/// The three roster relations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// `pilot_roster` tab
    Pilot,
    /// `drone_fleet` tab
    Drone,
    /// `missions` tab
    Mission,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Pilot => "pilot",
            RecordKind::Drone => "drone",
            RecordKind::Mission => "mission",
        })
    }
}

/// One sheet row keyed by column header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    /// Empty record
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style cell insert
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a cell
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// Raw cell value
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Non-blank cell value, or [`RosterError::MissingField`]
    pub fn require(&self, kind: RecordKind, column: &str) -> Result<&str> {
        match self.get(column) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(RosterError::MissingField {
                kind,
                field: column.to_string(),
            }),
        }
    }

    /// Cell parsed as a tag set; an absent column is the empty set
    pub fn tags(&self, column: &str) -> TagSet {
        self.get(column).map(TagSet::parse).unwrap_or_default()
    }

    /// Iterate `(column, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
