//! Fixed-interval step gate.

/// Decides when the next simulation step is due.
///
/// The caller passes the current time on every frame. A ticker built with
/// [`Ticker::new`] fires once the elapsed time exceeds `interval_ms`; one
/// built with [`Ticker::inclusive`] already fires when it reaches it. Either
/// way [`Ticker::ready`] returns true once and restarts the interval from
/// `now_ms`. Missed intervals are not caught up: a long stall yields a single
/// step.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval_ms: u64,
    last_ms: u64,
    inclusive: bool,
}

impl Ticker {
    /// Steps once strictly more than `interval_ms` has passed
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: now_ms,
            inclusive: false,
        }
    }

    /// Steps as soon as `interval_ms` has passed
    pub fn inclusive(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            inclusive: true,
            ..Self::new(interval_ms, now_ms)
        }
    }

    /// Earliest time stamp at which [`Ticker::ready`] can return true
    pub fn deadline_ms(&self) -> u64 {
        let due = self.last_ms.saturating_add(self.interval_ms);
        if self.inclusive {
            due
        } else {
            due.saturating_add(1)
        }
    }

    pub fn ready(&mut self, now_ms: u64) -> bool {
        if now_ms >= self.deadline_ms() {
            self.last_ms = now_ms;
            return true;
        }
        false
    }
}
