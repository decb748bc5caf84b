//! Case-insensitive binary search tree backing sorted enumeration.
//!
//! The tree is unbalanced; every operation is a plain recursive walk over
//! exclusively-owned nodes. Parents own their children outright, so there
//! are no back-references and no shared pointers anywhere in the structure.

use std::cmp::Ordering;

use crate::model::{Contact, fold};

#[derive(Debug, Clone)]
pub(crate) struct Node {
    contact: Contact,
    left: Tree,
    right: Tree,
}

pub(crate) type Tree = Option<Box<Node>>;

impl Node {
    fn leaf(contact: Contact) -> Box<Self> {
        Box::new(Self {
            contact,
            left: None,
            right: None,
        })
    }
}

/// Inserts a contact and returns the new subtree root.
///
/// Entries comparing not-less-than the current node descend right, so an
/// equal key always routes right rather than overwriting in place.
/// `remove` relies on this tie-break when it relocates a successor.
pub(crate) fn insert(tree: Tree, contact: Contact) -> Tree {
    match tree {
        None => Some(Node::leaf(contact)),
        Some(mut node) => {
            if contact < node.contact {
                node.left = insert(node.left.take(), contact);
            } else {
                node.right = insert(node.right.take(), contact);
            }
            Some(node)
        }
    }
}

/// Removes the node whose folded name matches `name`, returning the new
/// subtree root. A node with two children is replaced by its in-order
/// successor (left-most of the right subtree), which is then removed from
/// its original position. Absent names leave the tree unchanged.
pub(crate) fn remove(tree: Tree, name: &str) -> Tree {
    let Some(mut node) = tree else {
        return None;
    };
    match fold(name).cmp(&node.contact.key()) {
        Ordering::Less => {
            node.left = remove(node.left.take(), name);
            Some(node)
        }
        Ordering::Greater => {
            node.right = remove(node.right.take(), name);
            Some(node)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, Some(right)) => {
                let successor = min_contact(&right).clone();
                node.left = left;
                node.right = remove(Some(right), &successor.name);
                node.contact = successor;
                Some(node)
            }
        },
    }
}

/// In-order traversal: left subtree, node, right subtree. Visits every
/// node exactly once, yielding ascending case-folded-name order.
pub(crate) fn collect_in_order(tree: &Tree, out: &mut Vec<Contact>) {
    if let Some(node) = tree {
        collect_in_order(&node.left, out);
        out.push(node.contact.clone());
        collect_in_order(&node.right, out);
    }
}

pub(crate) fn count(tree: &Tree) -> usize {
    tree.as_ref()
        .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
}

fn min_contact(node: &Node) -> &Contact {
    match &node.left {
        Some(left) => min_contact(left),
        None => &node.contact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(names: &[&str]) -> Tree {
        let mut tree = None;
        for name in names {
            tree = insert(tree, Contact::new(*name, "000", ""));
        }
        tree
    }

    fn names(tree: &Tree) -> Vec<String> {
        let mut out = Vec::new();
        collect_in_order(tree, &mut out);
        out.into_iter().map(|c| c.name).collect()
    }

    #[test]
    fn in_order_is_sorted_case_folded() {
        let tree = build(&["Dave", "amy", "Carol", "bob"]);
        assert_eq!(names(&tree), ["amy", "bob", "Carol", "Dave"]);
    }

    #[test]
    fn equal_keys_route_right_and_coexist() {
        let mut tree = build(&["bob"]);
        tree = insert(tree, Contact::new("BOB", "111", ""));
        assert_eq!(names(&tree), ["bob", "BOB"]);
        let root = tree.as_ref().unwrap();
        assert!(root.left.is_none());
        assert!(root.right.is_some());
    }

    #[test]
    fn remove_leaf_and_single_child() {
        let mut tree = build(&["bob", "amy", "carol", "dave"]);
        tree = remove(tree, "dave");
        assert_eq!(names(&tree), ["amy", "bob", "carol"]);
        // carol now has no children; removing bob's right child chain
        tree = remove(tree, "carol");
        assert_eq!(names(&tree), ["amy", "bob"]);
    }

    #[test]
    fn remove_two_children_uses_successor() {
        let mut tree = build(&["dave", "bob", "amy", "carol", "frank", "erin"]);
        tree = remove(tree, "dave");
        assert_eq!(names(&tree), ["amy", "bob", "carol", "erin", "frank"]);
        // new root is dave's in-order successor
        assert_eq!(tree.as_ref().unwrap().contact.name, "erin");
    }

    #[test]
    fn remove_root_of_two() {
        let mut tree = build(&["bob", "carol"]);
        tree = remove(tree, "bob");
        assert_eq!(names(&tree), ["carol"]);
    }

    #[test]
    fn remove_absent_name_is_noop() {
        let mut tree = build(&["amy", "bob"]);
        tree = remove(tree, "zelda");
        assert_eq!(names(&tree), ["amy", "bob"]);
        assert_eq!(count(&tree), 2);
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut tree = build(&["Alice"]);
        tree = remove(tree, "ALICE");
        assert!(tree.is_none());
    }
}
