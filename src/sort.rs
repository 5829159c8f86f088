//! Selection sort. For each position it scans the unsorted tail for the smallest key and swaps
//! it into place, so it always does `O(n²)` comparisons but at most `n - 1` swaps and no extra
//! allocation. It is **not** stable: equal keys can come out in a different order than they went
//! in.
//!
//! # Examples
//!
//! ```
//! use classic_ds::sort::{sort_by_priority, PriorityRecord};
//!
//! let mut courses = vec![
//!     PriorityRecord::new("Python Programming for Beginners", 3),
//!     PriorityRecord::new("Data Science Essentials", 1),
//!     PriorityRecord::new("Web Development with Django", 2),
//!     PriorityRecord::new("Machine Learning Basics", 4),
//! ];
//! sort_by_priority(&mut courses);
//!
//! let names: Vec<_> = courses.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(
//!     names,
//!     [
//!         "Data Science Essentials",
//!         "Web Development with Django",
//!         "Python Programming for Beginners",
//!         "Machine Learning Basics",
//!     ]
//! );
//! ```

use std::fmt;

/// A named record ordered by a numeric priority. Lower numbers sort first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PriorityRecord {
    /// What the record is called.
    pub name: String,
    /// Where the record sorts.
    pub priority: i64,
}

impl PriorityRecord {
    /// Creates a record.
    pub fn new(name: impl Into<String>, priority: i64) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

impl fmt::Display for PriorityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority {})", self.name, self.priority)
    }
}

/// Sorts `records` in place by ascending priority.
pub fn sort_by_priority(records: &mut [PriorityRecord]) {
    selection_sort_by_key(records, |record| record.priority);
}

/// Sorts `items` in place in ascending order.
pub fn selection_sort<T>(items: &mut [T])
where
    T: PartialOrd,
{
    selection_sort_by(items, |a, b| a < b);
}

/// Sorts `items` in place by the key `key` extracts. Keys are only compared with `<`, so
/// incomparable keys (like a `NaN`) are never picked as a minimum.
pub fn selection_sort_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    selection_sort_by(items, |a, b| key(a) < key(b));
}

/// The sort itself. `less(a, b)` says whether `a` must come before `b`.
fn selection_sort_by<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 0..items.len() {
        let mut min = i;
        for j in i + 1..items.len() {
            if less(&items[j], &items[min]) {
                min = j;
            }
        }
        items.swap(i, min);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_priority() {
        let mut records: Vec<_> = [3, 1, 2, 4]
            .into_iter()
            .map(|p| PriorityRecord::new(format!("course {p}"), p))
            .collect();
        sort_by_priority(&mut records);

        assert_eq!(
            records.iter().map(|r| r.priority).collect::<Vec<_>>(),
            [1, 2, 3, 4]
        );
        assert_eq!(records[0].to_string(), "course 1 (priority 1)");
    }

    #[test]
    fn empty_and_single() {
        let mut empty: [u8; 0] = [];
        selection_sort(&mut empty);

        let mut single = [7];
        selection_sort(&mut single);
        assert_eq!(single, [7]);
    }

    #[test]
    fn not_stable() {
        // The first swap moves "b" past "c", which has the same priority.
        let mut records = vec![
            PriorityRecord::new("b", 2),
            PriorityRecord::new("c", 2),
            PriorityRecord::new("a", 1),
        ];
        sort_by_priority(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "c", "b"]);
    }

    #[test]
    fn negative_priorities() {
        let mut xs = [0, -5, 12, -5, 3];
        selection_sort(&mut xs);
        assert_eq!(xs, [-5, -5, 0, 3, 12]);
    }
}
