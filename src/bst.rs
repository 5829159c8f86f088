//! A plain, unbalanced BST. Every operation is a descent from the root so the cost is
//! `O(height)`, and since nothing rebalances the tree, inserting keys in sorted order degrades it
//! into a linked list. Nothing here recurses per level, so a degenerate tree costs time but never
//! stack. See [`avl`][crate::avl] for a tree that doesn't have that problem.
//!
//! # Examples
//!
//! ```
//! use classic_ds::bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1, "one"));
//! assert_eq!(tree.find(&1), Some(&"one"));
//!
//! // The first value inserted for a key is the one that sticks.
//! assert!(!tree.insert(1, "uno"));
//! assert_eq!(tree.find(&1), Some(&"one"));
//!
//! tree.insert(0, "zero");
//! let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, [0, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::util::{BinaryNode, InOrder};

type Link<K, V> = Option<Box<Node<K, V>>>;

/// An unbalanced Binary Search Tree mapping keys to values.
#[derive(Clone)]
pub struct Tree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value` under `key`. Returns `false` without touching the tree if `key` is already
    /// present; the value inserted first is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(101, "first"));
    /// assert!(!tree.insert(101, "second"));
    /// assert_eq!(tree.find(&101), Some(&"first"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    debug!("bst: key already present, keeping the existing value");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(key, value));
        self.len += 1;
        true
    }

    /// Finds the node holding `key`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(150, "web development");
    ///
    /// let node = tree.search(&150).unwrap();
    /// assert_eq!((node.key(), node.value()), (&150, &"web development"));
    /// assert!(tree.search(&999).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K, V>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.search(key).map(Node::value)
    }

    /// Whether a node holds `key`.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Iterates over the tree's `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> InOrder<'_, Node<K, V>> {
        InOrder::new(self.root.as_deref(), self.len)
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    ///
    /// Heights aren't stored, so this visits every node.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, Node<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// A `Node` has a key that is used for searching/sorting and a value that is associated with that
/// key. It owns up to two child subtrees.
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// The key this node is placed by.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored with the key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The root of the left subtree, holding smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The height of the subtree rooted at this node. A node with no children has a height of 1.
    ///
    /// This is `O(n)` in the size of the subtree: unlike [`avl::Node`][crate::avl::Node], an
    /// unbalanced node doesn't cache its height.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        deepest
    }
}

enum Visit<'a, K, V> {
    Enter(&'a Node<K, V>),
    Build(&'a Node<K, V>),
}

impl<'a, K, V> Visit<'a, K, V> {
    fn children(stack: &mut Vec<Self>, node: &'a Node<K, V>) {
        // Left is popped, and so built, first.
        stack.extend(node.right().map(Visit::Enter));
        stack.extend(node.left().map(Visit::Enter));
    }
}

impl<K, V> Clone for Node<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Copies the whole subtree in post-order with a work stack, so a long branch doesn't recurse.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Self>> = Vec::new();
        let mut stack = Vec::new();
        Visit::children(&mut stack, self);

        let take_built = |built: &mut Vec<Box<Self>>, node: &Self| {
            // Finished subtrees sit on `built` with the right one on top.
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            (left, right)
        };

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(node) => {
                    stack.push(Visit::Build(node));
                    Visit::children(&mut stack, node);
                }
                Visit::Build(node) => {
                    let (left, right) = take_built(&mut built, node);
                    built.push(Box::new(Self {
                        key: node.key.clone(),
                        value: node.value.clone(),
                        left,
                        right,
                    }));
                }
            }
        }

        let (left, right) = take_built(&mut built, self);
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            left,
            right,
        }
    }
}

impl<K, V> Drop for Node<K, V> {
    // A sorted insertion order leaves a single long branch which would overflow the stack if each
    // `Box` dropped its children recursively, so unlink the nodes onto a heap stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K, V> BinaryNode for Node<K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> &K {
        &self.key
    }

    fn value(&self) -> &V {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
