//! A last-in first-out stack on top of a growable array.
//!
//! # Examples
//!
//! ```
//! use classic_ds::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push("Python Programming for Beginners");
//! stack.push("Data Science Essentials");
//!
//! assert_eq!(stack.peek_last(), Some(&"Data Science Essentials"));
//! assert_eq!(stack.pop(), Some("Data Science Essentials"));
//! assert_eq!(stack.pop(), Some("Python Programming for Beginners"));
//!
//! // Nothing to pop.
//! assert_eq!(stack.pop(), None);
//! ```

use log::debug;

/// A last-in first-out stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the item on top, or `None` if there's nothing to pop.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop();
        if item.is_none() {
            debug!("stack: nothing to pop");
        }
        item
    }

    /// The item on top of the stack, without removing it.
    pub fn peek_last(&self) -> Option<&T> {
        self.items.last()
    }

    /// The number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;

    quickcheck::quickcheck! {
        fn pops_in_reverse(xs: Vec<i8>) -> bool {
            let mut stack = Stack::new();
            for x in &xs {
                stack.push(*x);
            }

            let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
            popped.into_iter().eq(xs.into_iter().rev()) && stack.pop().is_none()
        }
    }
}
