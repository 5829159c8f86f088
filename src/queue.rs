//! A fixed-capacity first-in first-out queue backed by a circular buffer. The storage is
//! allocated once when the queue is built; `front` and `rear` chase each other around it with
//! modulo arithmetic so freed slots at the start get reused.
//!
//! # Examples
//!
//! ```
//! use classic_ds::error::QueueError;
//! use classic_ds::queue::BoundedQueue;
//!
//! let mut queue = BoundedQueue::new(3)?;
//!
//! queue.enqueue("A")?;
//! queue.enqueue("B")?;
//! queue.enqueue("C")?;
//!
//! // No room left, so the item comes back to us.
//! assert_eq!(queue.enqueue("X"), Err(QueueError::Full("X")));
//!
//! assert_eq!(queue.dequeue(), Some("A"));
//! assert_eq!(queue.dequeue(), Some("B"));
//!
//! // "D" wraps around into the slot "A" used to live in.
//! queue.enqueue("D")?;
//! assert_eq!(queue.iter().copied().collect::<Vec<_>>(), ["C", "D"]);
//!
//! assert_eq!(queue.dequeue(), Some("C"));
//! assert_eq!(queue.dequeue(), Some("D"));
//! assert_eq!(queue.dequeue(), None);
//! # Ok::<(), QueueError<&'static str>>(())
//! ```

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, warn};

use crate::error::QueueError;

/// Positions of the first and last occupied slots. Both are in `0..capacity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Ends {
    front: usize,
    rear: usize,
}

/// A first-in first-out queue holding at most `capacity` items.
#[derive(Clone)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    /// `None` while the queue is empty.
    ends: Option<Ends>,
}

impl<T> BoundedQueue<T> {
    /// Builds an empty queue with room for `capacity` items.
    ///
    /// # Errors
    ///
    /// [`QueueError::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, QueueError<T>> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }

        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            ends: None,
        })
    }

    /// The number of items the queue can hold. This never changes.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of items currently queued.
    pub fn len(&self) -> usize {
        match self.ends {
            None => 0,
            Some(Ends { front, rear }) => {
                let capacity = self.capacity();
                (rear + capacity - front) % capacity + 1
            }
        }
    }

    /// Whether there's nothing queued.
    pub fn is_empty(&self) -> bool {
        self.ends.is_none()
    }

    /// Whether the slot after `rear` is `front`, i.e. every slot is taken.
    pub fn is_full(&self) -> bool {
        match self.ends {
            None => false,
            Some(Ends { front, rear }) => self.next(rear) == front,
        }
    }

    /// Adds `item` at the back of the queue.
    ///
    /// # Errors
    ///
    /// [`QueueError::Full`] holding `item` if there's no free slot. The queue is left unchanged.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>> {
        if self.is_full() {
            warn!(
                "queue: full at capacity {}, rejecting item",
                self.capacity()
            );
            return Err(QueueError::Full(item));
        }

        let rear = match self.ends {
            None => {
                self.ends = Some(Ends { front: 0, rear: 0 });
                0
            }
            Some(ref mut ends) => {
                ends.rear = (ends.rear + 1) % self.slots.len();
                ends.rear
            }
        };
        debug_assert!(self.slots[rear].is_none());
        self.slots[rear] = Some(item);
        Ok(())
    }

    /// Removes and returns the item at the front of the queue, or `None` if it's empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let Some(Ends { front, rear }) = self.ends else {
            debug!("queue: dequeue on an empty queue");
            return None;
        };

        let item = self.slots[front].take();
        self.ends = if front == rear {
            None
        } else {
            Some(Ends {
                front: self.next(front),
                rear,
            })
        };
        item
    }

    /// The item that the next [`dequeue`][Self::dequeue] would return.
    pub fn peek(&self) -> Option<&T> {
        self.ends
            .and_then(|Ends { front, .. }| self.slots[front].as_ref())
    }

    /// Iterates over the queued items from front to rear without removing them.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            next: self.ends.map(|ends| ends.front),
            remaining: self.len(),
        }
    }

    fn next(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }
}

impl<T> fmt::Debug for BoundedQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity())
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T>(&'a BoundedQueue<T>);

impl<T> fmt::Debug for DebugItems<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Renders the queued items from front to rear separated by spaces.
impl<T> fmt::Display for BoundedQueue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the items of a [`BoundedQueue`] from front to rear.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.next?;
        self.remaining -= 1;
        self.next = Some((index + 1) % self.slots.len());
        self.slots[index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<T: Clone>(queue: &BoundedQueue<T>) -> Vec<T> {
        queue.iter().cloned().collect()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            BoundedQueue::<u8>::new(0).err(),
            Some(QueueError::ZeroCapacity)
        );
    }

    #[test]
    fn fifo_with_wraparound() {
        let mut queue = BoundedQueue::new(3).unwrap();

        queue.enqueue('A').unwrap();
        queue.enqueue('B').unwrap();
        queue.enqueue('C').unwrap();
        assert_eq!(queue.dequeue(), Some('A'));
        assert_eq!(queue.dequeue(), Some('B'));
        queue.enqueue('D').unwrap();
        assert_eq!(queue.dequeue(), Some('C'));
        assert_eq!(queue.dequeue(), Some('D'));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn full_queue_rejects_without_changes() {
        let mut queue = BoundedQueue::new(5).unwrap();
        let courses = [
            "Python Programming",
            "Data Science Essentials",
            "Web Development with Django",
            "Machine Learning Basics",
            "Cybersecurity Fundamentals",
        ];
        for course in courses {
            assert!(!queue.is_full());
            queue.enqueue(course).unwrap();
        }

        assert!(queue.is_full());
        assert_eq!(queue.len(), 5);
        assert_eq!(
            queue.enqueue("Cloud Computing 101"),
            Err(QueueError::Full("Cloud Computing 101"))
        );
        assert_eq!(contents(&queue), courses);

        assert_eq!(queue.dequeue(), Some("Python Programming"));
        assert_eq!(queue.dequeue(), Some("Data Science Essentials"));
        queue.enqueue("Artificial Intelligence").unwrap();
        queue.enqueue("Blockchain Essentials").unwrap();

        assert!(queue.is_full());
        assert_eq!(
            contents(&queue),
            [
                "Web Development with Django",
                "Machine Learning Basics",
                "Cybersecurity Fundamentals",
                "Artificial Intelligence",
                "Blockchain Essentials",
            ]
        );
    }

    #[test]
    fn draining_resets_to_empty() {
        let mut queue = BoundedQueue::new(2).unwrap();
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());

        queue.enqueue(1).unwrap();
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.dequeue(), Some(1));

        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.iter().count(), 0);

        // After a reset the next item goes back into slot 0.
        queue.enqueue(2).unwrap();
        assert_eq!(queue.ends, Some(Ends { front: 0, rear: 0 }));
    }

    #[test]
    fn capacity_of_one() {
        let mut queue = BoundedQueue::new(1).unwrap();

        queue.enqueue("only").unwrap();
        assert!(queue.is_full());
        assert_eq!(queue.enqueue("extra"), Err(QueueError::Full("extra")));
        assert_eq!(queue.dequeue(), Some("only"));
        assert!(queue.is_empty());
    }

    #[test]
    fn display() {
        let mut queue = BoundedQueue::new(4).unwrap();
        assert_eq!(queue.to_string(), "");

        for n in 1..=4 {
            queue.enqueue(n).unwrap();
        }
        queue.dequeue();
        queue.enqueue(5).unwrap();

        assert_eq!(queue.to_string(), "2 3 4 5");
        assert_eq!(queue.iter().len(), 4);
    }
}
