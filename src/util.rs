//! Pieces shared by the binary trees in this crate. Both [`bst`][crate::bst] and
//! [`avl`][crate::avl] store their records in nodes with an optional left and right child, so they
//! can share one sorted iterator.

use std::iter::FusedIterator;

/// A read-only view of a node in a binary tree.
pub trait BinaryNode {
    /// The type used to place nodes in the tree.
    type Key;
    /// The payload stored next to the key.
    type Value;

    /// The key of this node.
    fn key(&self) -> &Self::Key;
    /// The value of this node.
    fn value(&self) -> &Self::Value;
    /// The root of the left subtree, if any.
    fn left(&self) -> Option<&Self>;
    /// The root of the right subtree, if any.
    fn right(&self) -> Option<&Self>;
}

/// A lazy in-order iterator over a binary tree. Yields `(key, value)` pairs in ascending key
/// order when the tree upholds the BST invariant.
///
/// Rather than recursing, it keeps the path of nodes whose left subtrees have been visited but
/// which haven't been yielded themselves.
#[derive(Debug)]
pub struct InOrder<'a, N> {
    stack: Vec<&'a N>,
    remaining: usize,
}

impl<N> Clone for InOrder<'_, N> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, N> InOrder<'a, N>
where
    N: BinaryNode,
{
    /// Starts a traversal at `root`. `len` must be the number of nodes in the tree; it's only
    /// used for `size_hint`.
    pub(crate) fn new(root: Option<&'a N>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants so the smallest one ends up on top.
    fn push_left_spine(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N> Iterator for InOrder<'a, N>
where
    N: BinaryNode,
{
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining = self.remaining.saturating_sub(1);

        // Everything left of `node` is done, so its right subtree comes next.
        self.push_left_spine(node.right());

        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N> ExactSizeIterator for InOrder<'_, N> where N: BinaryNode {}

impl<N> FusedIterator for InOrder<'_, N> where N: BinaryNode {}
