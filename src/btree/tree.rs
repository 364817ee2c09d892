use super::node::Node;
use super::*;
use crate::Error;
use std::fmt;

/// The result of an insertion
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The key was not present and is now part of the tree
    Inserted,
    /// The key was already present: the tree was left untouched
    Duplicate,
}

impl Outcome {
    /// Return whether the key was added to the tree
    pub fn is_inserted(self) -> bool {
        self == Outcome::Inserted
    }
}

/// An in-memory B-tree of distinct keys.
///
/// Every node holds at most `order - 1` keys and internal nodes hold one more child than keys.
/// Nodes that overflow are split around their midpoint and the median moves up to the parent,
/// so the tree only grows taller when the root itself splits.
///
/// The tree has no internal locking: concurrent writers must be serialized by the caller.
#[derive(Clone)]
pub struct BTree<T: Ord> {
    root: Option<Box<Node<T>>>,
    order: usize,
    len: usize,
}

impl<T: Ord> BTree<T> {
    /// Create an empty tree with `DEFAULT_ORDER`
    pub fn new() -> Self {
        BTree {
            root: None,
            order: DEFAULT_ORDER,
            len: 0,
        }
    }

    /// Create an empty tree whose nodes have at most `order` children.
    /// Fails if `order` is smaller than `MIN_ORDER`
    pub fn with_order(order: usize) -> Result<Self, Error> {
        if order < MIN_ORDER {
            return Err(Error::InvalidConfiguration { order });
        }
        Ok(BTree {
            root: None,
            order,
            len: 0,
        })
    }

    /// Return whether `key` is present in the tree
    pub fn search(&self, key: &T) -> bool {
        let mut node = match self.root.as_deref() {
            None => return false,
            Some(root) => root,
        };
        loop {
            match node.locate(key) {
                Location::Found(_) => return true,
                Location::Missing(_) if node.is_leaf() => return false,
                Location::Missing(index) => node = node.get_child(index),
            }
        }
    }

    /// Alias of `search`
    pub fn contains(&self, key: &T) -> bool {
        self.search(key)
    }

    /// Insert a new key into the tree.
    /// If the key is already present nothing changes and `Outcome::Duplicate` is returned
    pub fn insert(&mut self, key: T) -> Outcome {
        let order = self.order;
        let root = match self.root.as_mut() {
            None => {
                self.root = Some(Box::new(Node::new_leaf(key)));
                self.len = 1;
                return Outcome::Inserted;
            }
            Some(root) => root,
        };

        match root.try_insert(key, order) {
            TryInsertResult::Duplicate => return Outcome::Duplicate,
            TryInsertResult::Inserted(InsertResult::Absorbed) => {}
            TryInsertResult::Inserted(InsertResult::PendingSplit(median, right)) => {
                // Splitting reached the root: build a new root node
                if let Some(prev_root) = self.root.take() {
                    self.root = Some(Box::new(Node::new_root(median, *prev_root, right)));
                }
            }
        }

        self.len += 1;
        Outcome::Inserted
    }

    /// Return all keys in ascending order
    pub fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut keys = Vec::with_capacity(self.len);
        if let Some(root) = &self.root {
            root.walk(&mut |key: &T| keys.push(key.clone()));
        }
        keys
    }

    /// Return a sorted iterator over references to keys in the tree
    pub fn iter(&self) -> TreeIter<T> {
        TreeIter::new(self)
    }

    /// Return the total number of keys actually present in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return whether the tree holds no key, that is, whether it has no root node
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Maximum number of children per node
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of levels in the tree, 0 when it is empty
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    pub(super) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Keys held by the root node
    #[cfg(test)]
    pub(crate) fn root_keys(&self) -> Vec<&T> {
        match self.root() {
            None => vec![],
            Some(root) => (0..root.len()).map(|i| root.get_key(i)).collect(),
        }
    }

    /// Check every structural invariant of the whole tree
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self)
    where
        T: fmt::Debug,
    {
        match &self.root {
            None => assert_eq!(self.len, 0),
            Some(root) => {
                let (count, height) = root.assert_invariants(self.order, None, None);
                assert_eq!(count, self.len);
                assert_eq!(height, self.height());
            }
        }
    }
}

impl<T: Ord> Default for BTree<T> {
    fn default() -> Self {
        BTree::new()
    }
}

impl<T: Ord> Extend<T> for BTree<T> {
    /// Insert every key in sequence, ignoring duplicates
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for BTree<T> {
    /// Create a tree with `DEFAULT_ORDER` from an iterator, ignoring duplicates
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T: Ord> IntoIterator for &'a BTree<T> {
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
