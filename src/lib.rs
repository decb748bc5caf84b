//! In-memory contact directory indexed two ways at once.
//!
//! Every contact lives in both an order-preserving binary search tree
//! (sorted listing) and a prefix trie (fast prefix search), kept
//! consistent by [`ContactIndex`]. [`ContactStore`] persists a directory
//! to a flat JSON file and loads it back, starting empty when the file is
//! missing or unreadable.
//!
//! ```
//! use rolodex::ContactIndex;
//!
//! let mut directory = ContactIndex::new();
//! directory.add("Bob", "111", "");
//! directory.add("Bobby", "222", "");
//!
//! let hits = directory.search("bob");
//! assert_eq!(hits.len(), 2);
//! assert!(directory.remove("BOB"));
//! assert_eq!(directory.search("bob").len(), 1);
//! ```

pub mod index;
pub mod model;
pub mod storage;

pub use index::ContactIndex;
pub use model::Contact;
pub use storage::{ContactStore, StorageError};
