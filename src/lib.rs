//! This crate exposes small implementations of classical data structures, mostly for
//! educational purposes. Each module stands on its own:
//!
//! - [`queue`]: a fixed-capacity circular queue.
//! - [`stack`]: a last-in first-out stack over a growable array, and [`catalog`], which uses one
//!   to track selections from a list of offered items.
//! - [`bst`]: an unbalanced Binary Search Tree.
//! - [`avl`]: a self-balancing Binary Search Tree.
//! - [`nary`]: a general tree whose nodes have any number of ordered children.
//! - [`sort`]: selection sort.
//! - [`metrics`]: mean and median over a list of samples.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! records. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! a key, the value inserted with it, and sometimes child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for keys in the tree takes
//! `O(height)` (where `height` is defined as the longest path from the root `Node` to a leaf
//! `Node`). With clever construction the height of a BST can be limited to `O(lg N)` where `N` is
//! the number of nodes in the tree; that's what [`avl`] does and [`bst`] doesn't. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! Neither tree replaces values: inserting a key that's already present leaves the tree as it
//! was and reports `false`.
//!
//! ## Logging
//!
//! Rejected operations (a full queue, a missing parent, ...) are reported through the [`log`]
//! facade as well as through return values. Install any `log` backend to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
pub mod catalog;
pub mod error;
pub mod metrics;
pub mod nary;
pub mod queue;
pub mod sort;
pub mod stack;
pub mod util;
