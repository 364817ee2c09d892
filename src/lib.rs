//! An in-memory multiway B-tree.
//!
//! Keys are kept sorted inside fixed-capacity nodes. A node that overflows is split
//! around its midpoint and the median key moves up to its parent, possibly all the way
//! to a brand new root.
//!
//! ```
//! use multiway_btree::{BTree, Outcome};
//!
//! let mut tree = BTree::with_order(5).unwrap();
//! for key in vec![10, 20, 5, 6, 12, 30, 7, 17] {
//!     assert_eq!(tree.insert(key), Outcome::Inserted);
//! }
//! assert_eq!(tree.insert(10), Outcome::Duplicate);
//! assert!(tree.search(&6));
//! assert_eq!(tree.traverse(), vec![5, 6, 7, 10, 12, 17, 20, 30]);
//! ```

#[cfg(test)]
mod tests;

pub mod btree;

mod error;

#[cfg(feature = "key-generator")]
pub mod key_generator;

pub use btree::{BTree, Outcome, TreeIter, DEFAULT_ORDER, MIN_ORDER};
pub use error::Error;
