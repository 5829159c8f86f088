//! A self-balancing BST (specifically, an AVL tree). Each node keeps the height of its subtree
//! and every insert walks back up its path fixing heights and rotating wherever one side got
//! more than one level taller than the other. That caps the height at `O(lg N)`, so inserts and
//! lookups stay logarithmic no matter what order keys arrive in.
//!
//! # Examples
//!
//! ```
//! use classic_ds::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Keys inserted in ascending order would make a plain BST 7 levels tall.
//! for order_id in [101, 120, 150, 180, 203, 250, 300] {
//!     tree.insert(order_id, format!("order #{order_id}"));
//! }
//! assert_eq!(tree.height(), 3);
//!
//! assert_eq!(tree.find(&150).map(String::as_str), Some("order #150"));
//!
//! // Like the plain BST, the first value for a key is kept.
//! assert!(!tree.insert(150, "replacement".to_string()));
//! assert_eq!(tree.find(&150).map(String::as_str), Some("order #150"));
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::util::{BinaryNode, InOrder};

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A self-balancing Binary Search Tree mapping keys to values.
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
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `value` under `key` and rebalances the path back to the root. Returns `false`
    /// without touching the tree if `key` is already present; the value inserted first is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(3, 'c');
    /// tree.insert(2, 'b');
    /// // This would leave 3 -> 2 -> 1 as a single branch, so 2 is rotated up.
    /// tree.insert(1, 'a');
    ///
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let inserted = insert(&mut self.root, key, value).is_some();
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Finds the node holding `key`, if there is one.
    pub fn search(&self, key: &K) -> Option<&Node<K, V>>
    where
        K: Ord,
    {
        self.root.as_deref().and_then(|root| root.search(key))
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
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

    /// How many levels are in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        height(&self.root)
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

/// A node of an AVL tree. Besides its key, value, and children it tracks the height of the
/// subtree it roots.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
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

    /// The stored height of the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The height of the left subtree minus the height of the right subtree. In a balanced tree
    /// this is always -1, 0, or 1.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    fn search(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.search(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.search(key)),
        }
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

fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// Inserts into the subtree at `link`, rebalancing it on the way back up.
///
/// Returns `None` if the key was already present. Otherwise returns how the new key compared to
/// the key at the root of this subtree before any rotation: `Less` or `Greater` for the side the
/// insert went down, `Equal` when the root is the new node itself. The caller one level up uses
/// this to tell which grandchild subtree grew.
fn insert<K, V>(link: &mut Link<K, V>, key: K, value: V) -> Option<Ordering>
where
    K: Ord,
{
    let node = match link {
        Some(node) => node,
        None => {
            *link = Some(Node::new_boxed(key, value));
            return Some(Ordering::Equal);
        }
    };

    let direction = key.cmp(&node.key);
    let child_direction = match direction {
        Ordering::Less => insert(&mut node.left, key, value)?,
        Ordering::Equal => {
            debug!("avl: key already present, keeping the existing value");
            return None;
        }
        Ordering::Greater => insert(&mut node.right, key, value)?,
    };

    node.fix_height();
    rebalance(link, child_direction);

    if cfg!(debug_assertions) {
        if let Some(root) = link.as_deref() {
            assert_eq!(
                root.height,
                height(&root.left).max(height(&root.right)) + 1
            );
            assert!(root.balance_factor().abs() <= 1);
        }
    }

    Some(direction)
}

/// Restores the AVL invariant at `link` after an insert below it.
///
/// `child_direction` is how the inserted key compared to the key of the child it was inserted
/// under. If the child subtree had rotated, its height would be back to what it was before the
/// insert and nothing here would be out of balance, so the child root is the same node the
/// insert compared against.
///
/// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
fn rebalance<K, V>(link: &mut Link<K, V>, child_direction: Ordering) {
    let Some(node) = link.as_mut() else {
        return;
    };

    match (node.balance_factor(), child_direction) {
        // Left-left: the key went left of `left`.
        (balance, Ordering::Less) if balance > 1 => rotate_right(link),
        // Right-right: the key went right of `right`.
        (balance, Ordering::Greater) if balance < -1 => rotate_left(link),
        // Left-right
        (balance, Ordering::Greater) if balance > 1 => {
            rotate_left(&mut node.left);
            rotate_right(link);
        }
        // Right-left
        (balance, Ordering::Less) if balance < -1 => {
            rotate_right(&mut node.right);
            rotate_left(link);
        }
        _ => {}
    }
}

/// Rotate the subtree at `link` to the right. This moves the left child up vertically and the
/// old root down vertically. Used to rebalance the tree when the left child is too tall. Does
/// nothing when there is no left child.
///
/// ```text
///       old_root             new_root
///        /     \              /    \
///   new_root    z   rotate-> x   old_root
///    /   \                        /   \
///   x    t2                      t2    z
/// ```
fn rotate_right<K, V>(link: &mut Link<K, V>) {
    let Some(mut old_root) = link.take() else {
        return;
    };
    let Some(mut new_root) = old_root.left.take() else {
        *link = Some(old_root);
        return;
    };
    trace!("avl: rotating right");

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    *link = Some(new_root);
}

/// The mirror image of [`rotate_right`]: the right child moves up and its left subtree is handed
/// to the old root.
fn rotate_left<K, V>(link: &mut Link<K, V>) {
    let Some(mut old_root) = link.take() else {
        return;
    };
    let Some(mut new_root) = old_root.right.take() else {
        *link = Some(old_root);
        return;
    };
    trace!("avl: rotating left");

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    *link = Some(new_root);
}
