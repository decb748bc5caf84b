//! Flat-file persistence for the contact directory.
//!
//! The on-disk format is a JSON array of `{name, number, email}` objects.
//! Loading is forgiving: a missing or unparsable file yields an empty
//! directory and a warning, never an error. Saving reports real failures.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::index::ContactIndex;
use crate::model::Contact;

/// Errors that can occur while writing the contacts file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write contacts file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize contacts: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle on the contacts file backing a directory.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the contacts file into a fresh index, adding records in file
    /// order. Missing or corrupt files are absorbed into "start empty."
    pub fn load(&self) -> ContactIndex {
        let mut index = ContactIndex::new();
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "contacts file unreadable, starting empty");
                return index;
            }
        };
        let records: Vec<Contact> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "contacts file unparsable, starting empty");
                return index;
            }
        };
        debug!(path = %self.path.display(), count = records.len(), "loaded contacts");
        for record in records {
            index.add(&record.name, &record.number, &record.email);
        }
        index
    }

    /// Writes the full directory in sorted order.
    pub fn save(&self, index: &ContactIndex) -> Result<(), StorageError> {
        let contacts = index.list_all();
        let json = serde_json::to_string(&contacts)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}
