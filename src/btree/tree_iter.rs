use super::node::Node;
use super::BTree;

struct TreeIterState<'a, T: Ord> {
    node: &'a Node<T>,
    pos: usize,
}

// Derived impls would require `T: Copy`
impl<'a, T: Ord> Clone for TreeIterState<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: Ord> Copy for TreeIterState<'a, T> {}

/// Lazy in-order iterator over the keys of a `BTree`
pub struct TreeIter<'a, T: Ord> {
    /// List of parent nodes and current child position in them
    tail_states: Vec<TreeIterState<'a, T>>,
    /// The current node and the next key position to return.
    /// `None` when the tree is empty
    head_state: Option<TreeIterState<'a, T>>,
    len: usize,
}

impl<'a, T: Ord> TreeIter<'a, T> {
    pub(super) fn new(tree: &'a BTree<T>) -> Self {
        // Create initial state, by recursing into child at the bottom
        let mut iter = TreeIter {
            tail_states: Vec::with_capacity(tree.height()),
            head_state: None,
            len: tree.len(),
        };
        if let Some(root) = tree.root() {
            iter.prepare_state_from(root);
        }
        iter
    }

    fn prepare_state_from(&mut self, mut node: &'a Node<T>) {
        let mut head_state = TreeIterState { node, pos: 0 };
        while !node.is_leaf() {
            node = node.get_child(0);
            let next_state = TreeIterState { node, pos: 0 };
            self.tail_states
                .push(std::mem::replace(&mut head_state, next_state));
        }
        self.head_state = Some(head_state);
    }
}

impl<'a, T: Ord> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let TreeIterState { node, pos } = self.head_state?;
            if pos < node.len() {
                // Iterate in node
                let res = node.get_key(pos);
                if !node.is_leaf() {
                    self.tail_states.push(TreeIterState { node, pos: pos + 1 });
                    self.prepare_state_from(node.get_child(pos + 1));
                } else {
                    self.head_state = Some(TreeIterState { node, pos: pos + 1 });
                }
                self.len -= 1;
                return Some(res);
            }

            // Walk over the chain
            self.head_state = self.tail_states.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: Ord> ExactSizeIterator for TreeIter<'a, T> {}
impl<'a, T: Ord> std::iter::FusedIterator for TreeIter<'a, T> {}
