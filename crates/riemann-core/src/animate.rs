// File: crates/riemann-core/src/animate.rs
// Summary: Demo animation that refines the partition by one sub-interval per timer tick.

use std::time::{Duration, Instant};

use crate::plotter::Plotter;

/// Interval between animation ticks.
pub const TICK: Duration = Duration::from_millis(250);

/// Endless partition-count animation starting at one sub-interval.
/// It never finishes on its own; the host stops calling [`PartitionAnimation::tick`].
#[derive(Clone, Debug)]
pub struct PartitionAnimation {
    next_count: usize,
    period: Duration,
    next_tick: Instant,
}

impl PartitionAnimation {
    pub fn new(now: Instant) -> Self {
        Self::with_period(now, TICK)
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self { next_count: 1, period, next_tick: now }
    }

    /// When the host should wake up next.
    pub fn deadline(&self) -> Instant {
        self.next_tick
    }

    pub fn next_count(&self) -> usize {
        self.next_count
    }

    /// Advance if the deadline has passed. Returns `true` when the plotter changed.
    pub fn tick(&mut self, now: Instant, plotter: &mut Plotter) -> bool {
        if now < self.next_tick {
            return false;
        }
        plotter.set_partition_count(self.next_count);
        self.next_count += 1;
        self.next_tick = now + self.period;
        true
    }
}
