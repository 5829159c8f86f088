//! A general rooted tree where each node has any number of children, kept in the order they were
//! added. Children are attached by naming their parent: the first node with that label in a
//! depth-first, pre-order walk wins, so with duplicate labels the one nearest the top-left of the
//! tree is used.
//!
//! # Examples
//!
//! ```
//! use classic_ds::nary::Tree;
//!
//! let mut tree = Tree::new();
//! tree.set_root("Professional Courses");
//! tree.add_child(&"Professional Courses", "Python Programming")?;
//! tree.add_child(&"Python Programming", "Basic Python")?;
//! tree.add_child(&"Professional Courses", "Data Science Essentials")?;
//!
//! assert!(tree.add_child(&"Missing", "Nowhere").is_err());
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "Professional Courses\n  Python Programming\n    Basic Python\n  Data Science Essentials\n",
//! );
//! # Ok::<(), classic_ds::error::NaryError<&'static str>>(())
//! ```

use std::fmt;
use std::iter::FusedIterator;

use log::debug;

use crate::error::NaryError;

/// A labelled node and its children, in insertion order.
///
/// Cloning, comparing and dropping a node walk its subtree with a heap stack, so a tree that is
/// one long chain is fine at any depth.
pub struct Node<T> {
    label: T,
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    fn leaf(label: T) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    /// This node's label.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// This node's children in the order they were added.
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    /// The first node labelled `label` in a pre-order walk of this subtree.
    fn find_mut(&mut self, label: &T) -> Option<&mut Self>
    where
        T: PartialEq,
    {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.label == *label {
                return Some(node);
            }
            // Reversed, like `PreOrder`, so the first child is searched first.
            stack.extend(node.children.iter_mut().rev());
        }
        None
    }

    fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: vec![(0, self)],
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        enum Visit<'a, T> {
            Enter(&'a Node<T>),
            Build(&'a Node<T>),
        }

        // Finished copies collect on `built` in pre-order, so the last `n` are the children of
        // the node being built.
        let mut built: Vec<Self> = Vec::new();
        let mut stack: Vec<_> = self.children.iter().rev().map(Visit::Enter).collect();
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(node) => {
                    stack.push(Visit::Build(node));
                    stack.extend(node.children.iter().rev().map(Visit::Enter));
                }
                Visit::Build(node) => {
                    let children = built.split_off(built.len() - node.children.len());
                    built.push(Self {
                        label: node.label.clone(),
                        children,
                    });
                }
            }
        }

        Self {
            label: self.label.clone(),
            children: built,
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        // Depths plus labels in pre-order pin down the whole shape.
        self.pre_order()
            .map(|(depth, node)| (depth, &node.label))
            .eq(other.pre_order().map(|(depth, node)| (depth, &node.label)))
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    // The subtree's `(depth, label)` pairs in pre-order, depths relative to this node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.pre_order().map(|(depth, node)| (depth, &node.label)))
            .finish()
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// A rooted tree with an unbounded number of ordered children per node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<Node<T>>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// An empty tree. Nothing can be added until it has a root.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Replaces the whole tree with a single root labelled `label`.
    pub fn set_root(&mut self, label: T) {
        self.root = Some(Node::leaf(label));
        self.len = 1;
    }

    /// Appends a new leaf labelled `child` to the first node labelled `parent`.
    ///
    /// # Errors
    ///
    /// [`NaryError::ParentNotFound`] holding `child` if no node is labelled `parent`. The parent
    /// isn't created and the tree is left unchanged.
    pub fn add_child(&mut self, parent: &T, child: T) -> Result<(), NaryError<T>>
    where
        T: PartialEq,
    {
        match self.root.as_mut().and_then(|root| root.find_mut(parent)) {
            Some(node) => {
                node.children.push(Node::leaf(child));
                self.len += 1;
                Ok(())
            }
            None => {
                debug!("nary: parent not found, child not added");
                Err(NaryError::ParentNotFound(child))
            }
        }
    }

    /// The first node labelled `label` in a depth-first, pre-order walk.
    pub fn find(&self, label: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.iter_nodes()
            .find(|(_, node)| node.label == *label)
            .map(|(_, node)| node)
    }

    /// The root node, if one has been set.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Walks the tree in pre-order, yielding each label with its depth. The root has depth 0 and
    /// children come after their parent in the order they were added.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.iter_nodes(),
        }
    }

    fn iter_nodes(&self) -> PreOrder<'_, T> {
        match &self.root {
            Some(root) => root.pre_order(),
            None => PreOrder { stack: Vec::new() },
        }
    }
}

/// Renders one label per line, indented by two spaces per level.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, label) in self.iter() {
            writeln!(f, "{:indent$}{label}", "", indent = depth * 2)?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order walk over nodes. The stack holds nodes still to visit with their depths, and the
/// children of a node are pushed in reverse so the first child is popped first.
#[derive(Clone, Debug)]
struct PreOrder<'a, T> {
    stack: Vec<(usize, &'a Node<T>)>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = (usize, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// A pre-order iterator over the `(depth, label)` pairs of a [`Tree`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    nodes: PreOrder<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|(depth, node)| (depth, &node.label))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
