//! Prefix trie over case-folded names.
//!
//! One child edge per folded character. Terminal nodes carry a bucket of
//! contacts; the structure itself tolerates several contacts terminating
//! at the same path even though the orchestration layer keeps at most one
//! live contact per distinct name. Children live in a `BTreeMap` so
//! collection order is deterministic (ascending character).

use std::collections::BTreeMap;

use crate::model::{Contact, fold};

#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_end: bool,
    contacts: Vec<Contact>,
}

impl TrieNode {
    /// Walks or creates one child per folded character of `name`, then
    /// marks the final node terminal and appends the contact there.
    pub(crate) fn insert(&mut self, name: &str, contact: Contact) {
        let mut node = self;
        for ch in fold(name).chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_end = true;
        node.contacts.push(contact);
    }

    /// Returns every contact whose folded name starts with the folded
    /// prefix, depth-first with children visited in ascending character
    /// order. A prefix that walks off the trie yields nothing; the empty
    /// prefix yields everything.
    pub(crate) fn search(&self, prefix: &str) -> Vec<Contact> {
        let mut node = self;
        for ch in fold(prefix).chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }
        let mut out = Vec::new();
        node.collect(&mut out);
        out
    }

    fn collect(&self, out: &mut Vec<Contact>) {
        if self.is_end {
            out.extend(self.contacts.iter().cloned());
        }
        for child in self.children.values() {
            child.collect(out);
        }
    }

    /// Removes `contact` from the bucket at the end of `name`'s exact
    /// folded path, clearing the terminal flag if the bucket empties, then
    /// prunes empty non-terminal nodes from the leaf back toward the root.
    /// Pruning stops at the first node that still has children or is
    /// terminal, so shared prefixes of other names survive. Returns
    /// `false` only when the path does not fully exist.
    pub(crate) fn remove(&mut self, name: &str, contact: &Contact) -> bool {
        let path: Vec<char> = fold(name).chars().collect();
        self.remove_at(&path, contact).is_some()
    }

    // Some(prune) tells the caller whether to drop this child; None means
    // the path was missing and nothing was touched.
    fn remove_at(&mut self, path: &[char], contact: &Contact) -> Option<bool> {
        match path.split_first() {
            None => {
                if let Some(pos) = self.contacts.iter().position(|c| c == contact) {
                    self.contacts.remove(pos);
                }
                if self.contacts.is_empty() {
                    self.is_end = false;
                }
                Some(!self.is_end && self.children.is_empty())
            }
            Some((&ch, rest)) => {
                let child = self.children.get_mut(&ch)?;
                let prune_child = child.remove_at(rest, contact)?;
                if prune_child {
                    self.children.remove(&ch);
                }
                Some(!self.is_end && self.children.is_empty())
            }
        }
    }
}
