// File: crates/riemann-core/src/partition.rs
// Summary: Uniform partitions of an interval into equal-width sub-intervals.

use crate::geometry::Interval;

/// `n + 1` breakpoints `a + i*(b - a)/n` for `i` in `0..=n`.
/// The last value may differ from `b` by rounding; it is left as computed.
pub fn uniform_partition(interval: Interval, n: usize) -> Vec<f64> {
    let width = interval.width() / n as f64;
    (0..=n).map(|i| interval.start + i as f64 * width).collect()
}

/// Ordered breakpoints defining consecutive sub-intervals.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    points: Vec<f64>,
}

impl Partition {
    pub fn uniform(interval: Interval, n: usize) -> Self {
        Self { points: uniform_partition(interval, n) }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of sub-intervals.
    pub fn len(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subintervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.points.windows(2).map(|w| Interval::new(w[0], w[1]))
    }
}
