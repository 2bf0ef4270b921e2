//! Tag sets for skills, certifications and capabilities
//!
//! Sheets store these as comma-joined text. The cell is parsed exactly once
//! into a normalized set: fragments are trimmed and lower-cased, and empty
//! fragments are dropped so a blank cell is the empty set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Normalized set of free-text labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Empty tag set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Parse a comma-delimited cell
    pub fn parse(cell: &str) -> Self {
        cell.split(',').collect()
    }

    /// Normalize a single label the same way [`TagSet::parse`] does
    pub fn normalize(tag: &str) -> String {
        tag.trim().to_lowercase()
    }

    /// Whether the normalized label is present
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(&Self::normalize(tag))
    }

    /// Whether every tag in `self` is also in `other`
    pub fn is_subset(&self, other: &TagSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Tags in `self` that are absent from `other`, in sorted order
    pub fn difference(&self, other: &TagSet) -> TagSet {
        TagSet(self.0.difference(&other.0).cloned().collect())
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no tags
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate tags in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TagSet(
            iter.into_iter()
                .map(|tag| Self::normalize(tag.as_ref()))
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tag)?;
        }
        write!(f, "}}")
    }
}
