use std::time::{Duration, Instant};

/// Upper bound on how long the event loop blocks waiting for input
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown resolution
pub const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Cancellable one-second schedule driving the countdown
///
/// Armed when the countdown starts and disarmed whenever it stops, so a
/// paused or finished countdown never receives a stale tick.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the first tick one step after `now`
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + COUNTDOWN_STEP);
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of whole steps that fell due up to `now`. Each consumed step
    /// schedules the next one exactly a step later.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut count = 0;
        while let Some(due) = self.next_due {
            if due > now {
                break;
            }
            count += 1;
            self.next_due = Some(due + COUNTDOWN_STEP);
        }
        count
    }

    /// How long the event loop may block before the next tick is owed
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.next_due {
            Some(due) => due.saturating_duration_since(now).min(tick_duration()),
            None => tick_duration(),
        }
    }
}
