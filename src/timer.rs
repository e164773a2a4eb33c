// timer.rs — clocks and the single-shot deferred transition used for drag decay

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source. Timestamps are offsets from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Identifies one scheduled firing of a [`Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

/// Cancellable single-shot timer.
///
/// At most one firing is pending at a time: `start` replaces whatever was
/// scheduled before, so an older deadline can never fire late.
#[derive(Debug, Default)]
pub struct Timeout {
    pending: Option<(TimerId, Duration)>,
    generation: u64,
}

impl Timeout {
    pub fn start(&mut self, now: Duration, delay: Duration) -> TimerId {
        self.generation += 1;
        let id = TimerId(self.generation);
        self.pending = Some((id, now + delay));
        id
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// Fire the pending timer if its deadline has passed. Returns the id of
    /// the firing, once.
    pub fn poll(&mut self, now: Duration) -> Option<TimerId> {
        match self.pending {
            Some((id, deadline)) if now >= deadline => {
                self.pending = None;
                Some(id)
            }
            _ => None,
        }
    }

    /// Whether `id` is the most recently started timer.
    pub fn is_current(&self, id: TimerId) -> bool {
        id.0 == self.generation
    }
}
