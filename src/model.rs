//! Contact record type and key normalization.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Folds a name into the canonical key form. Every comparison, tree
/// ordering decision, and trie path in the crate goes through this one
/// function, so case-insensitivity holds uniformly across both indexes.
pub fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// A single directory entry.
///
/// Identity is the case-folded name only: two contacts are equal when
/// their folded names match, and ordering is lexicographic on the folded
/// name. The number and email never participate in equality or ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub number: String,
    /// Optional in serialized form; absent fields deserialize as "".
    #[serde(default)]
    pub email: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            email: email.into(),
        }
    }

    /// Case-folded key shared by both indexes.
    pub fn key(&self) -> String {
        fold(&self.name)
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Contact {}

impl PartialOrd for Contact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Contact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.number, self.email
        )
    }
}
