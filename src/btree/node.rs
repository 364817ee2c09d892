use super::*;

/// A node holds up to `order - 1` sorted keys. Internal nodes hold exactly one
/// more child than keys, leaves hold none. The order itself is owned by the
/// tree and passed down to every mutating call.
#[derive(Clone, Debug)]
pub(super) struct Node<T: Ord> {
    keys: Vec<T>,
    children: Option<Vec<Box<Node<T>>>>,
}

impl<T: Ord> Node<T> {
    /// Build a leaf holding a single key. This is how the very first node of a tree is born.
    /// Storage grows on demand: `order` may be arbitrarily large, so nothing is reserved up front
    pub(super) fn new_leaf(key: T) -> Self {
        Node {
            keys: vec![key],
            children: None,
        }
    }

    /// Build the new root after the previous one was split
    pub(super) fn new_root(median: T, left: Node<T>, right: Node<T>) -> Self {
        Node {
            keys: vec![median],
            children: Some(vec![Box::new(left), Box::new(right)]),
        }
    }

    /// Build a node from its parts.
    /// Panics if the number of children does not match the number of keys
    fn with_keys_and_children(keys: Vec<T>, children: Option<Vec<Box<Node<T>>>>) -> Self {
        if let Some(children) = &children {
            assert_eq!(children.len(), keys.len() + 1);
        }
        Node { keys, children }
    }

    /// Return the total number of keys in this node
    pub(super) fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return the key at the given index.
    /// Panics if out-of-bounds
    pub(super) fn get_key(&self, index: usize) -> &T {
        &self.keys[index]
    }

    /// Return whether the node is a leaf
    pub(super) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Return the child at the given index.
    /// Panics if it is a leaf node or out-of-bounds access
    pub(super) fn get_child(&self, index: usize) -> &Node<T> {
        match &self.children {
            Some(children) => &children[index],
            None => panic!("Leaf nodes have no children"),
        }
    }

    fn get_mut_child(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.children {
            Some(children) => &mut children[index],
            None => panic!("Leaf nodes have no children"),
        }
    }

    /// Find where `key` is, or where it would go
    pub(super) fn locate(&self, key: &T) -> Location {
        match self.keys.binary_search(key) {
            Ok(index) => Location::Found(index),
            Err(index) => Location::Missing(index),
        }
    }

    /// Number of levels from this node down to its leaves (a leaf has height 1)
    pub(super) fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self;
        while !node.is_leaf() {
            node = node.get_child(0);
            height += 1;
        }
        height
    }

    /// Recursive in-order walk: child 0, key 0, child 1, ..., child `len`
    pub(super) fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a T),
    {
        match &self.children {
            None => self.keys.iter().for_each(|key| visit(key)),
            Some(children) => {
                children[0].walk(visit);
                for (key, child) in self.keys.iter().zip(&children[1..]) {
                    visit(key);
                    child.walk(visit);
                }
            }
        }
    }

    /// Recursive implementation of `BTree::insert`.
    /// Duplicates are detected at every level on the way down, before anything is mutated.
    /// When this node splits, it will return the median and new right node
    pub(super) fn try_insert(&mut self, key: T, order: usize) -> TryInsertResult<T> {
        let index = match self.locate(&key) {
            Location::Found(_) => return TryInsertResult::Duplicate,
            Location::Missing(index) => index,
        };

        if self.is_leaf() {
            // Insertion point found
            return TryInsertResult::Inserted(self.insert_and_split(key, None, index, order));
        }

        // Recursively look into the child
        match self.get_mut_child(index).try_insert(key, order) {
            // Insertion bubbled a split up
            TryInsertResult::Inserted(InsertResult::PendingSplit(median, right_node)) => {
                TryInsertResult::Inserted(self.insert_and_split(
                    median,
                    Some(right_node),
                    index,
                    order,
                ))
            }
            x => x,
        }
    }

    /// Insert `key` (and optional right child) into this node at `index`.
    /// If the node is full, it will be split into (left, median, right) around the
    /// structural midpoint `(order - 1) / 2`.
    /// Self will become left and the other two values will be returned
    fn insert_and_split(
        &mut self,
        key: T,
        right_child: Option<Node<T>>,
        index: usize,
        order: usize,
    ) -> InsertResult<T> {
        if self.len() < order - 1 {
            // Simply insert at this node
            self.insert(key, right_child, index, order);
            return InsertResult::Absorbed;
        }

        let mid = (order - 1) / 2;
        let (median, right) = if index <= mid {
            // The new key belongs to the left half. Move keys `mid..` to the right,
            // insert, then the last key of the left half is the median
            let right_keys = self.keys.split_off(mid);
            let moved_children = self.children.as_mut().map(|c| c.split_off(mid + 1));
            self.insert(key, right_child, index, order);
            let median = self.keys.remove(mid);
            let right_children = match (self.children.as_mut(), moved_children) {
                (Some(children), Some(moved)) => {
                    // The last child of the left half becomes the first one of the right
                    let mut right_children = Vec::with_capacity(moved.len() + 1);
                    right_children.push(children.remove(mid + 1));
                    right_children.extend(moved);
                    Some(right_children)
                }
                _ => None,
            };
            (median, Node::with_keys_and_children(right_keys, right_children))
        } else {
            // The new key belongs to the right half. The key at `mid` is the median
            let right_keys = self.keys.split_off(mid + 1);
            let median = self.keys.remove(mid);
            let right_children = self.children.as_mut().map(|c| c.split_off(mid + 1));
            let mut right = Node::with_keys_and_children(right_keys, right_children);
            right.insert(key, right_child, index - mid - 1, order);
            (median, right)
        };

        InsertResult::PendingSplit(median, right)
    }

    /// Insert `key` (and optional right child) into this non-full node
    fn insert(&mut self, key: T, right_child: Option<Node<T>>, index: usize, order: usize) {
        // Sanity checks
        assert!(self.len() < order - 1);
        assert!(index <= self.len());

        // If this is a leaf node no child can be inserted.
        // Conversely, in an internal node a child must be inserted
        assert_eq!(self.children.is_none(), right_child.is_none());

        self.keys.insert(index, key);
        if let (Some(children), Some(child)) = (self.children.as_mut(), right_child) {
            children.insert(index + 1, Box::new(child));
        }
    }

    /// Check every structural invariant of the subtree rooted here, with all keys
    /// strictly inside `(lower, upper)`.
    /// Return the number of keys and the height of the subtree
    #[cfg(test)]
    pub(super) fn assert_invariants(
        &self,
        order: usize,
        lower: Option<&T>,
        upper: Option<&T>,
    ) -> (usize, usize)
    where
        T: std::fmt::Debug,
    {
        assert!(!self.keys.is_empty(), "Empty node");
        assert!(self.len() <= order - 1, "Overflowing node {:?}", self.keys);
        for pair in self.keys.windows(2) {
            assert!(pair[0] < pair[1], "Unsorted node {:?}", self.keys);
        }
        if let Some(lower) = lower {
            assert!(*lower < self.keys[0]);
        }
        if let Some(upper) = upper {
            assert!(self.keys[self.len() - 1] < *upper);
        }

        match &self.children {
            None => (self.len(), 1),
            Some(children) => {
                assert_eq!(children.len(), self.len() + 1);
                let mut total = self.len();
                let mut height = None;
                for (i, child) in children.iter().enumerate() {
                    let child_lower = if i == 0 { lower } else { Some(&self.keys[i - 1]) };
                    let child_upper = self.keys.get(i).or(upper);
                    let (count, child_height) =
                        child.assert_invariants(order, child_lower, child_upper);
                    total += count;
                    match height {
                        None => height = Some(child_height),
                        Some(h) => assert_eq!(h, child_height, "Leaves at different depths"),
                    }
                }
                (total, height.unwrap_or(0) + 1)
            }
        }
    }
}
