mod node;
mod tree;
mod tree_iter;

pub use tree::{BTree, Outcome};
pub use tree_iter::TreeIter;

/// Smallest legal order: one key and two children are needed for a split to make sense
pub const MIN_ORDER: usize = 3;

/// Order used by `BTree::new()`
pub const DEFAULT_ORDER: usize = 5;

/// Where a key sits inside a single node
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Location {
    /// The key is stored at this index
    Found(usize),
    /// The key is absent: it would be inserted at this index, which is also
    /// the index of the child to descend into
    Missing(usize),
}

enum TryInsertResult<T: Ord> {
    Duplicate,
    Inserted(InsertResult<T>),
}

enum InsertResult<T: Ord> {
    /// The key was absorbed below, nothing left to do
    Absorbed,
    /// The subtree grew taller: the median and the new right sibling must
    /// be inserted in the parent
    PendingSplit(T, node::Node<T>),
}
