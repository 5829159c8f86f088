//! Summary statistics over a growable list of samples. Each statistic implements [`Metric`], so
//! callers can hand any mix of them to [`Samples::summarize`].
//!
//! # Examples
//!
//! ```
//! use classic_ds::metrics::{Mean, Median, Metric, Samples};
//!
//! let mut grades = Samples::new();
//! for grade in [90.0, 70.0, 85.0, 100.0] {
//!     grades.push(grade);
//! }
//!
//! let summary = grades.summarize(&[&Mean, &Median]);
//! assert_eq!(summary, [("mean", Some(86.25)), ("median", Some(87.5))]);
//!
//! assert_eq!(grades.remove(1), Ok(70.0));
//! assert_eq!(Median.compute(grades.as_slice()), Some(90.0));
//! ```

use crate::error::MetricsError;

/// A statistic computed from a list of samples.
pub trait Metric {
    /// A short name for the statistic.
    fn name(&self) -> &'static str;

    /// Computes the statistic, or `None` if there are no samples.
    fn compute(&self, samples: &[f64]) -> Option<f64>;
}

/// The arithmetic mean.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mean;

impl Metric for Mean {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn compute(&self, samples: &[f64]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// The middle sample once sorted. With an even number of samples it's the mean of the two in
/// the middle.
#[derive(Clone, Copy, Debug, Default)]
pub struct Median;

impl Metric for Median {
    fn name(&self) -> &'static str {
        "median"
    }

    fn compute(&self, samples: &[f64]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Some(sorted[mid])
        } else {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        }
    }
}

/// A list of samples in the order they were added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Samples {
    values: Vec<f64>,
}

impl Samples {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value`.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Removes the sample at `index`, shifting the later ones down.
    ///
    /// # Errors
    ///
    /// [`MetricsError::IndexOutOfBounds`] if there's no sample at `index`.
    pub fn remove(&mut self, index: usize) -> Result<f64, MetricsError> {
        if index >= self.values.len() {
            return Err(MetricsError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            });
        }
        Ok(self.values.remove(index))
    }

    /// The samples in the order they were added.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// How many samples there are.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Computes every metric in `metrics`, paired with its name.
    pub fn summarize(&self, metrics: &[&dyn Metric]) -> Vec<(&'static str, Option<f64>)> {
        metrics
            .iter()
            .map(|metric| (metric.name(), metric.compute(&self.values)))
            .collect()
    }
}

impl Extend<f64> for Samples {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl FromIterator<f64> for Samples {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
