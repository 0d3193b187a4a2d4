//! This crate exposes a linked Binary Search Tree (BST) that keeps its items in
//! order and can be rebuilt to minimum height on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The invariants of the BST here are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). Nothing here keeps the
//! height down as items come and go: feeding the tree sorted input gives it height
//! `N - 1` and turns every lookup into a linear scan. [`linked::Tree::rebalance`]
//! rebuilds the tree with height `ceil(lg(N + 1)) - 1`, the best any tree of `N`
//! nodes can do. BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! The crate logs through the [`log`] facade and never installs a logger itself.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod error;
pub mod iter;
pub mod linked;

pub use config::Duplicates;
pub use error::{Result, TreeError};
pub use linked::Tree;
