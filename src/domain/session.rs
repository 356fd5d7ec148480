use super::enums::Phase;
use super::settings::TimerSettings;

/// Emitted when the countdown of a phase runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseComplete {
    pub finished: Phase,
    pub next: Phase,
}

/// Work/break countdown
///
/// `remaining_secs` never underflows: the tick that brings it to zero also
/// flips the phase and reloads a full duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    remaining_secs: u32,
    phase: Phase,
    running: bool,
}

impl Session {
    /// Stopped, in the work phase, with a full work duration loaded
    pub fn new(settings: &TimerSettings) -> Self {
        Self {
            remaining_secs: settings.phase_secs(Phase::Work),
            phase: Phase::Work,
            running: false,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or pause. Returns whether the countdown is now running.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Stop and reload the full duration of the current phase
    pub fn reset(&mut self, settings: &TimerSettings) {
        self.running = false;
        self.remaining_secs = settings.phase_secs(self.phase);
    }

    /// Overwrite the displayed remaining time without touching phase or
    /// running state
    pub fn set_remaining(&mut self, secs: u32) {
        self.remaining_secs = secs;
    }

    /// Advance by one second of wall-clock time
    pub fn tick(&mut self, settings: &TimerSettings) -> Option<PhaseComplete> {
        if !self.running {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        let finished = self.phase;
        let next = finished.next();
        self.running = false;
        self.phase = next;
        self.remaining_secs = settings.phase_secs(next);
        Some(PhaseComplete { finished, next })
    }

    /// Fraction of the current phase already elapsed (0.0 to 1.0)
    pub fn progress(&self, settings: &TimerSettings) -> f64 {
        let total = settings.phase_secs(self.phase) as f64;
        if total == 0.0 {
            return 1.0;
        }
        let elapsed = total - self.remaining_secs as f64;
        (elapsed / total).clamp(0.0, 1.0)
    }
}

/// Render seconds as `MM:SS`
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
