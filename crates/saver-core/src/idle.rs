//! Idle-detection state machine.
//!
//! Pure two-state machine with explicit `now_ms` inputs; the web frontend
//! supplies wall-clock time and the actual countdown timer, so this type can
//! be driven synchronously in tests.

use crate::constants::IDLE_TIME_LIMIT_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Inactive,
    Active,
}

/// Tracks whether the effect is showing and when the countdown would elapse.
#[derive(Clone, Debug)]
pub struct IdleMonitor {
    phase: Phase,
    deadline_ms: f64,
}

impl IdleMonitor {
    /// Start inactive, with a full countdown ahead.
    pub fn new(now_ms: f64) -> Self {
        Self {
            phase: Phase::Inactive,
            deadline_ms: now_ms + f64::from(IDLE_TIME_LIMIT_MS),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Countdown remaining before the effect would activate, clamped at zero.
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (self.deadline_ms - now_ms).max(0.0)
    }

    /// An input signal arrived. Restarts the countdown from the full idle
    /// limit; returns `true` when a running effect session must be torn down.
    pub fn record_activity(&mut self, now_ms: f64) -> bool {
        let was_active = self.phase == Phase::Active;
        self.phase = Phase::Inactive;
        self.deadline_ms = now_ms + f64::from(IDLE_TIME_LIMIT_MS);
        was_active
    }

    /// The countdown elapsed with no intervening activity. Returns `true`
    /// when this transitioned `Inactive -> Active`; a timeout observed while
    /// already active is ignored.
    pub fn timeout_fired(&mut self) -> bool {
        if self.phase == Phase::Active {
            return false;
        }
        self.phase = Phase::Active;
        true
    }

    /// The drawing surface could not be created: fall back to inactive and
    /// rearm, so the next timeout retries after the condition may have
    /// resolved.
    pub fn activation_failed(&mut self, now_ms: f64) {
        self.phase = Phase::Inactive;
        self.deadline_ms = now_ms + f64::from(IDLE_TIME_LIMIT_MS);
    }
}
