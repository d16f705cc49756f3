use std::thread;
use std::time::{Duration, Instant};

/// Suspension seam for the emit loop; tests substitute a fake.
pub trait TickClock {
    /// Blocks until one period has elapsed since the previous pause.
    fn pause(&mut self, period: Duration);
}

/// Paces ticks against `Instant` deadlines. The steady clock is monotonic,
/// so wall-clock adjustments never move the cadence, and anchoring each
/// deadline to the previous one keeps slow batch writes from accumulating
/// drift.
pub struct SteadyClock {
    deadline: Option<Instant>,
}

impl SteadyClock {
    pub fn new() -> Self {
        Self { deadline: None }
    }
}

impl Default for SteadyClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickClock for SteadyClock {
    fn pause(&mut self, period: Duration) {
        let now = Instant::now();
        let target = match self.deadline {
            Some(previous) => previous + period,
            None => now + period,
        };
        match target.checked_duration_since(now) {
            Some(wait) => {
                thread::sleep(wait);
                self.deadline = Some(target);
            }
            None => {
                // Fell behind a full period; re-anchor to now instead of
                // bursting catch-up batches at the consumer.
                self.deadline = Some(now);
            }
        }
    }
}
