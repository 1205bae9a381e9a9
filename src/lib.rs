//! A key-ordered Binary Search Tree (BST) with structural algebra, a text
//! encoding, and reconstruction from traversals.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! associated with it, and up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Searching takes `O(height)`. This tree never rebalances by itself, so
//! inserting keys in sorted order produces a chain as tall as the tree is
//! long. [`Tree::balance`] rebuilds it with height `⌈lg(N + 1)⌉` on demand.
//!
//! ## Beyond lookup
//!
//! - Six traversal orders ([`Order`]).
//! - Shape-and-value equality, subtree containment, merging and subtree
//!   extraction.
//! - A one-line text encoding via `Display`/`FromStr`:
//!   `(()10:10())20:20(()30:30())`.
//! - [`Tree::recover`] rebuilds a tree from its pre-order and in-order keys.
//! - [`Forest`] holds trees of mixed element types behind indices.
//!
//! # Examples
//!
//! ```
//! use bintree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! for k in 1..=7 {
//!     tree.insert(k, k * 10);
//! }
//! assert_eq!(tree.depth(), 7);
//!
//! tree.balance();
//! assert_eq!(tree.depth(), 3);
//!
//! let text = tree.to_string();
//! let copy: Tree<i32, i32> = text.parse().unwrap();
//! assert_eq!(copy, tree);
//!
//! let mut values = Vec::new();
//! copy.traverse(Order::Lkr, |v| values.push(*v));
//! assert_eq!(values, [10, 20, 30, 40, 50, 60, 70]);
//! ```

#![deny(missing_docs)]

mod algebra;
mod codec;
pub mod error;
mod pretty;
mod recovery;
mod registry;
pub mod traverse;
pub mod tree;

pub use error::{ErrorCode, Result, TreeError};
pub use pretty::{Pretty, PrettyConfig};
pub use registry::Forest;
pub use traverse::Order;
pub use tree::Tree;
