//! Read-only views over the items a menu or a select displays.
//!
//! A [`Collection`] is the contract the widgets consume: key lookup, display
//! order, parent/child structure and the disabled set. [`Tree`] is the
//! in-memory implementation built from declared [`Item`]s.
//!
//! ```
//! use icy_menu_core::collection::{Collection, Item, Tree};
//!
//! let tree = Tree::new(vec![
//!     Item::new("open", "Open"),
//!     Item::new("share", "Share").with_children(vec![
//!         Item::new("mail", "Mail"),
//!         Item::new("chat", "Chat").disabled(),
//!     ]),
//! ])
//! .unwrap();
//!
//! assert_eq!(tree.children(None).len(), 2);
//! assert!(tree.node(&"share".into()).unwrap().has_child_items());
//! assert!(tree.is_disabled(&"chat".into()));
//! ```
use crate::{Error, Key};

use rustc_hash::{FxHashMap, FxHashSet};

/// A read-only, indexed tree of items.
///
/// Reading never has side effects; widgets treat the answers as authoritative.
pub trait Collection {
    /// Returns the [`Node`] with the given key, if any.
    fn node(&self, key: &Key) -> Option<&Node>;

    /// Returns the keys directly below `parent` in display order.
    ///
    /// `None` addresses the top level.
    fn children(&self, parent: Option<&Key>) -> &[Key];

    /// Returns whether the item with the given key is disabled.
    fn is_disabled(&self, key: &Key) -> bool;

    /// Returns the total amount of items in the collection.
    fn len(&self) -> usize;

    /// Returns whether the collection holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether the given key belongs to the collection.
    fn contains(&self, key: &Key) -> bool {
        self.node(key).is_some()
    }

    /// Returns the ancestors of `key`, closest first.
    fn ancestors(&self, key: &Key) -> Vec<Key> {
        let mut ancestors = Vec::new();
        let mut current = self.node(key).and_then(|node| node.parent.clone());

        while let Some(parent) = current {
            current = self.node(&parent).and_then(|node| node.parent.clone());
            ancestors.push(parent);
        }

        ancestors
    }
}

/// An item of a [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The identity of the item.
    pub key: Key,
    /// The key of the parent item, if nested.
    pub parent: Option<Key>,
    /// The nesting depth; top-level items have level `0`.
    pub level: usize,
    /// The rendered text content of the item.
    pub text: String,
    /// An optional secondary description.
    pub description: Option<String>,
    /// The keys of the nested items, in display order.
    pub children: Vec<Key>,
}

impl Node {
    /// Returns whether the item opens a submenu.
    pub fn has_child_items(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The declaration of an item, used to build a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    key: Key,
    text: String,
    description: Option<String>,
    disabled: bool,
    children: Vec<Item>,
}

impl Item {
    /// Declares a new [`Item`].
    pub fn new(key: impl Into<Key>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            description: None,
            disabled: false,
            children: Vec::new(),
        }
    }

    /// Sets the description of the [`Item`].
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the [`Item`] as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Nests the given items below this one, turning it into a submenu trigger.
    pub fn with_children(mut self, children: Vec<Item>) -> Self {
        self.children = children;
        self
    }
}

/// An in-memory [`Collection`].
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: FxHashMap<Key, Node>,
    roots: Vec<Key>,
    disabled: FxHashSet<Key>,
}

impl Tree {
    /// Builds a [`Tree`] from the given declarations.
    ///
    /// Fails if the same key is declared twice.
    pub fn new(items: Vec<Item>) -> Result<Self, Error> {
        let mut tree = Self::default();
        tree.roots = tree.insert_all(items, None, 0)?;

        Ok(tree)
    }

    /// Builds a flat [`Tree`], as used by a select.
    pub fn flat(items: impl IntoIterator<Item = (Key, String)>) -> Result<Self, Error> {
        Self::new(
            items
                .into_iter()
                .map(|(key, text)| Item::new(key, text))
                .collect(),
        )
    }

    /// Adds the given keys to the disabled set.
    pub fn with_disabled_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.disabled.extend(keys);
        self
    }

    /// Iterates over every [`Node`] in display order, depth first.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        let mut stack: Vec<&Key> = self.roots.iter().rev().collect();

        std::iter::from_fn(move || {
            let key = stack.pop()?;
            let node = self.nodes.get(key)?;
            stack.extend(node.children.iter().rev());

            Some(node)
        })
    }

    fn insert_all(
        &mut self,
        items: Vec<Item>,
        parent: Option<&Key>,
        level: usize,
    ) -> Result<Vec<Key>, Error> {
        let mut keys = Vec::with_capacity(items.len());

        for item in items {
            if self.nodes.contains_key(&item.key) {
                return Err(Error::DuplicateKey(item.key));
            }

            let key = item.key.clone();

            if item.disabled {
                let _ = self.disabled.insert(key.clone());
            }

            // Reserve the key before descending so nested duplicates are caught
            let _ = self.nodes.insert(
                key.clone(),
                Node {
                    key: key.clone(),
                    parent: parent.cloned(),
                    level,
                    text: item.text,
                    description: item.description,
                    children: Vec::new(),
                },
            );

            let children = self.insert_all(item.children, Some(&key), level + 1)?;

            if let Some(node) = self.nodes.get_mut(&key) {
                node.children = children;
            }

            keys.push(key);
        }

        Ok(keys)
    }
}

impl Collection for Tree {
    fn node(&self, key: &Key) -> Option<&Node> {
        self.nodes.get(key)
    }

    fn children(&self, parent: Option<&Key>) -> &[Key] {
        match parent {
            None => &self.roots,
            Some(parent) => self
                .nodes
                .get(parent)
                .map(|node| node.children.as_slice())
                .unwrap_or(&[]),
        }
    }

    fn is_disabled(&self, key: &Key) -> bool {
        self.disabled.contains(key)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        Tree::new(vec![
            Item::new("a", "A"),
            Item::new("b", "B").with_children(vec![
                Item::new("b1", "B1"),
                Item::new("b2", "B2").with_children(vec![Item::new("b2x", "B2X")]),
            ]),
            Item::new("c", "C").disabled(),
        ])
        .expect("valid tree")
    }

    #[test]
    fn children_follow_display_order() {
        let tree = sample();

        assert_eq!(tree.children(None), &[Key::from("a"), "b".into(), "c".into()]);
        assert_eq!(tree.children(Some(&"b".into())), &[Key::from("b1"), "b2".into()]);
        assert!(tree.children(Some(&"a".into())).is_empty());
        assert!(tree.children(Some(&"missing".into())).is_empty());
    }

    #[test]
    fn nodes_know_their_place() {
        let tree = sample();
        let node = tree.node(&"b2x".into()).expect("nested node");

        assert_eq!(node.level, 2);
        assert_eq!(node.parent, Some("b2".into()));
        assert_eq!(tree.ancestors(&"b2x".into()), vec![Key::from("b2"), "b".into()]);
        assert!(tree.ancestors(&"a".into()).is_empty());
    }

    #[test]
    fn iteration_is_depth_first() {
        let tree = sample();
        let keys: Vec<&str> = tree.iter().map(|node| node.key.as_str()).collect();

        assert_eq!(keys, vec!["a", "b", "b1", "b2", "b2x", "c"]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn disabled_keys_are_tracked() {
        let tree = sample().with_disabled_keys([Key::from("a")]);

        assert!(tree.is_disabled(&"a".into()));
        assert!(tree.is_disabled(&"c".into()));
        assert!(!tree.is_disabled(&"b".into()));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = Tree::new(vec![
            Item::new("a", "A").with_children(vec![Item::new("a", "Again")]),
        ]);

        assert_eq!(result.unwrap_err(), Error::DuplicateKey("a".into()));
    }

    #[test]
    fn flat_trees_use_numeric_keys() {
        let tree = Tree::flat((1..=5u64).map(|n| (Key::from(n), n.to_string())))
            .expect("valid tree");

        assert_eq!(tree.len(), 5);
        assert!(tree.contains(&"5".into()));
        assert!(!tree.contains(&"6".into()));
    }
}
