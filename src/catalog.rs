//! A catalog of offered items together with a history of the ones that were selected. Only
//! offered items can be selected, and the history is a [`Stack`] so the latest selection is the
//! first one withdrawn.
//!
//! # Examples
//!
//! ```
//! use classic_ds::catalog::Catalog;
//! use classic_ds::error::CatalogError;
//!
//! let mut catalog = Catalog::new();
//! catalog.offer("Python Programming for Beginners");
//! catalog.offer("Data Science Essentials");
//!
//! catalog.select(&"Python Programming for Beginners")?;
//! catalog.select(&"Data Science Essentials")?;
//! assert_eq!(
//!     catalog.select(&"Underwater Basket Weaving"),
//!     Err(CatalogError::NotOffered)
//! );
//!
//! assert_eq!(catalog.most_recent(), Some(&"Data Science Essentials"));
//! assert_eq!(catalog.withdraw(), Some("Data Science Essentials"));
//! assert_eq!(catalog.most_recent(), Some(&"Python Programming for Beginners"));
//! # Ok::<(), CatalogError>(())
//! ```

use log::debug;

use crate::error::CatalogError;
use crate::stack::Stack;

/// Offered items in the order they were added, plus a last-in first-out selection history.
#[derive(Clone, Debug)]
pub struct Catalog<T> {
    offered: Vec<T>,
    selected: Stack<T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Catalog<T> {
    /// An empty catalog with no selections.
    pub fn new() -> Self {
        Self {
            offered: Vec::new(),
            selected: Stack::new(),
        }
    }

    /// Adds `item` to the offered items. Offering the same item twice lists it twice.
    pub fn offer(&mut self, item: T) {
        self.offered.push(item);
    }

    /// The offered items in the order they were added.
    pub fn offered(&self) -> std::slice::Iter<'_, T> {
        self.offered.iter()
    }

    /// Whether `item` has been offered.
    pub fn is_offered(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.offered.contains(item)
    }

    /// Records a selection of `item`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotOffered`] if `item` was never offered. The history is left unchanged.
    pub fn select(&mut self, item: &T) -> Result<(), CatalogError>
    where
        T: PartialEq + Clone,
    {
        match self.offered.iter().find(|offered| *offered == item) {
            Some(offered) => {
                self.selected.push(offered.clone());
                Ok(())
            }
            None => {
                debug!("catalog: rejecting selection of an item that isn't offered");
                Err(CatalogError::NotOffered)
            }
        }
    }

    /// The latest selection still in the history.
    pub fn most_recent(&self) -> Option<&T> {
        self.selected.peek_last()
    }

    /// Removes the latest selection from the history and returns it.
    pub fn withdraw(&mut self) -> Option<T> {
        self.selected.pop()
    }

    /// The selection history from oldest to newest.
    pub fn history(&self) -> std::slice::Iter<'_, T> {
        self.selected.iter()
    }
}
