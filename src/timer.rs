use std::time::Duration;

use crate::constants::MIN_AUTOPLAY_INTERVAL;

/// Recurring timer driven by frame deltas instead of wall-clock callbacks.
///
/// Owning one means it is armed; dropping it cancels it. A delta that spans
/// several intervals fires once per elapsed interval so cadence never drifts
/// on a slow frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringTimer {
    interval: Duration,
    elapsed: Duration,
}

impl RecurringTimer {
    /// Periods shorter than [`MIN_AUTOPLAY_INTERVAL`] are raised to it, so a
    /// zero interval cannot spin [`update`](Self::update).
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_AUTOPLAY_INTERVAL),
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn remaining(&self) -> Duration {
        self.interval - self.elapsed
    }

    /// Restarts the current period from zero.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Advances the timer and returns how many periods completed.
    pub fn update(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}
