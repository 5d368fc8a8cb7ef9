//! A height-balanced (AVL) binary search tree over `i32` keys.
//!
//! Keys are unique. Inserting restores the AVL condition with single and
//! double rotations, so search and insert are logarithmic in the number of
//! keys. The tree can be walked in-order, pre-order, post-order and level
//! order, and rendered as an indented hierarchy for diagnostics.
//!
//! ```
//! use avl_balanced_tree::BalancedTree;
//! let mut tree: BalancedTree = (1..=9).collect();
//! assert_eq!(tree.height(), Some(3));
//! assert!(tree.search(7).is_some());
//! assert!(tree.search(10).is_none());
//!
//! let mut out = Vec::new();
//! tree.display(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("4(3)\n"));
//!
//! tree.clear();
//! assert!(tree.is_empty());
//! ```

mod display;
mod traverse;
mod tree;

pub use display::DisplayStyle;
pub use traverse::{InOrder, LevelOrder, PostOrder, PreOrder};
pub use tree::{BalancedTree, Node, Rebalances};
