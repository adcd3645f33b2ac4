// File: crates/riemann-core/src/sample.rs
// Summary: Fixed-step function sampling and sampled extrema over sub-intervals.

use crate::geometry::Interval;

/// Lazy `(x, f(x))` sequence for `x = start + i*step` while `x <= end`.
///
/// The right endpoint only appears when `step` lands on it exactly. A clone replays
/// from the current position; [`Samples::restart`] rewinds to the start.
#[derive(Clone, Debug)]
pub struct Samples<F> {
    f: F,
    interval: Interval,
    step: f64,
    index: usize,
}

impl<F: Fn(f64) -> f64> Samples<F> {
    /// Rewind to the left endpoint.
    pub fn restart(&mut self) {
        self.index = 0;
    }

    #[inline]
    fn x_at(&self, i: usize) -> f64 {
        self.interval.start + i as f64 * self.step
    }
}

impl<F: Fn(f64) -> f64> Iterator for Samples<F> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.x_at(self.index);
        if !(x <= self.interval.end) {
            return None;
        }
        self.index += 1;
        Some((x, (self.f)(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ((self.interval.end - self.x_at(self.index)) / self.step).floor();
        if remaining.is_finite() && remaining >= 0.0 {
            // float rounding at the boundary can add or drop one point
            let n = remaining as usize;
            (n, Some(n + 2))
        } else {
            (0, None)
        }
    }
}

/// Sample `f` over `interval` every `step` units. `step` must be positive.
pub fn sample<F: Fn(f64) -> f64>(f: F, interval: Interval, step: f64) -> Samples<F> {
    Samples { f, interval, step, index: 0 }
}

/// Sampled `(min, max)` of `f` over `interval`.
///
/// Both extrema are seeded with `f(interval.start)`, so a sub-interval narrower
/// than `step` still yields the left-endpoint value rather than nothing.
pub fn min_max<F: Fn(f64) -> f64>(f: F, interval: Interval, step: f64) -> (f64, f64) {
    let seed = f(interval.start);
    sample(&f, interval, step).fold((seed, seed), |(lo, hi), (_, y)| (lo.min(y), hi.max(y)))
}
