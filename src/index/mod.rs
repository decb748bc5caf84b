//! Dual-index directory core.
//!
//! One logical write fans out to two physical indexes: a binary search
//! tree keyed by case-folded name (sorted enumeration) and a prefix trie
//! over the same names (prefix search). Neither tree is reachable from
//! outside this module; every mutation goes through [`ContactIndex`], so
//! the both-trees-updated invariant is enforced by the API surface.

mod ordered;
mod trie;

use tracing::debug;

use crate::model::{Contact, fold};

use self::trie::TrieNode;

/// The directory: a BST and a trie over one logical set of contacts.
///
/// Single-threaded by design; wrap the whole index in one exclusive lock
/// if it must be shared, since the invariants span both trees.
#[derive(Debug, Clone, Default)]
pub struct ContactIndex {
    tree: ordered::Tree,
    trie: TrieNode,
}

impl ContactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact to both indexes. Always succeeds.
    ///
    /// No uniqueness check happens here: adding a name twice leaves two
    /// entries behind, and callers that rely on unique names must check
    /// with [`search`](Self::search) first.
    pub fn add(&mut self, name: &str, number: &str, email: &str) -> bool {
        let contact = Contact::new(name, number, email);
        debug!(%name, "adding contact");
        self.tree = ordered::insert(self.tree.take(), contact.clone());
        self.trie.insert(name, contact);
        true
    }

    /// All contacts whose name starts with `prefix`, case-insensitively.
    pub fn search(&self, prefix: &str) -> Vec<Contact> {
        self.trie.search(prefix)
    }

    /// Every contact in ascending case-folded-name order.
    pub fn list_all(&self) -> Vec<Contact> {
        let mut out = Vec::new();
        ordered::collect_in_order(&self.tree, &mut out);
        out
    }

    /// Removes the contact with exactly this name (case-insensitive).
    ///
    /// The exact match is located through a prefix search over `name` —
    /// the trie has no O(1) exact lookup. Returns `false` and changes
    /// nothing when no exact match exists; otherwise removes the entry
    /// from the tree (a no-op-safe walk) and then from the trie, whose
    /// result is the returned flag.
    pub fn remove(&mut self, name: &str) -> bool {
        let key = fold(name);
        let Some(exact) = self.search(name).into_iter().find(|c| c.key() == key) else {
            return false;
        };
        debug!(%name, "removing contact");
        self.tree = ordered::remove(self.tree.take(), name);
        self.trie.remove(name, &exact)
    }

    /// Replaces the contact named `old_name` with a freshly built one.
    ///
    /// Modeled as remove-then-add, not an in-place edit: an unknown
    /// `old_name` fails cleanly before anything changes, and the add runs
    /// only after the remove succeeded. The two steps are not atomic —
    /// `add` cannot currently fail, but if it ever could, the old entry
    /// would already be gone.
    pub fn update(
        &mut self,
        old_name: &str,
        new_name: &str,
        new_number: &str,
        new_email: &str,
    ) -> bool {
        if !self.remove(old_name) {
            return false;
        }
        self.add(new_name, new_number, new_email)
    }

    pub fn len(&self) -> usize {
        ordered::count(&self.tree)
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }
}
