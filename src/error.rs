//! Errors for the recoverable failures of this crate's containers. Running out of elements
//! (popping an empty stack, dequeueing an empty queue) and search misses are not errors; those
//! are reported as `None`.

use thiserror::Error;

/// Errors from [`BoundedQueue`][crate::queue::BoundedQueue].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError<T> {
    /// The queue has no free slot. The rejected item is handed back untouched.
    #[error("queue is full, item rejected")]
    Full(T),
    /// A queue must have room for at least one item.
    #[error("queue capacity must be non-zero")]
    ZeroCapacity,
}

/// Errors from the N-ary [`Tree`][crate::nary::Tree].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NaryError<T> {
    /// No node carries the requested parent label. The child label that would have been
    /// inserted is handed back.
    #[error("parent not found")]
    ParentNotFound(T),
}

/// Errors from [`Catalog`][crate::catalog::Catalog].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The item was never offered so it can't be selected.
    #[error("item is not offered by the catalog")]
    NotOffered,
}

/// Errors from [`Samples`][crate::metrics::Samples].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    /// Tried to remove a sample that doesn't exist.
    #[error("sample index {index} is out of bounds for {len} samples")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// How many samples there were.
        len: usize,
    },
}
