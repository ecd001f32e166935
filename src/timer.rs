//! Countdown state and its transitions.
//!
//! `TimerState` is a plain value: every control is a method that mutates it
//! synchronously and reports what happened. Scheduling of ticks lives in
//! [`crate::ticker`].

use crate::defaults::{CRITICAL_THRESHOLD_SECS, WARNING_THRESHOLD_SECS};
use log::{debug, info};

/// Observable phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Expired,
}

/// Result of delivering one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    Ignored,
    /// One second was consumed and time remains.
    Continued,
    /// This tick took the remaining time to zero or below.
    Completed,
}

/// Urgency classification of the remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyTier {
    Neutral,
    Warning,
    Critical,
    Expired,
}

impl UrgencyTier {
    pub fn for_remaining(remaining_seconds: i64) -> Self {
        if remaining_seconds <= 0 {
            UrgencyTier::Expired
        } else if remaining_seconds <= CRITICAL_THRESHOLD_SECS {
            UrgencyTier::Critical
        } else if remaining_seconds <= WARNING_THRESHOLD_SECS {
            UrgencyTier::Warning
        } else {
            UrgencyTier::Neutral
        }
    }

    /// CSS modifier used by the timer ring.
    pub fn css_class(self) -> &'static str {
        match self {
            UrgencyTier::Neutral => "tier-neutral",
            UrgencyTier::Warning => "tier-warning",
            UrgencyTier::Critical => "tier-critical",
            UrgencyTier::Expired => "tier-expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    total_seconds: u32,
    is_running: bool,
    remaining_seconds: i64,
    numbers_visible: bool,
}

impl TimerState {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            is_running: false,
            remaining_seconds: i64::from(total_seconds),
            numbers_visible: true,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn numbers_visible(&self) -> bool {
        self.numbers_visible
    }

    pub fn phase(&self) -> TimerPhase {
        if self.remaining_seconds <= 0 {
            TimerPhase::Expired
        } else if self.is_running {
            TimerPhase::Running
        } else if self.remaining_seconds == i64::from(self.total_seconds) {
            TimerPhase::Idle
        } else {
            TimerPhase::Paused
        }
    }

    /// Begin or resume counting. Returns `false` when already running or
    /// when no time is left; an expired timer needs a reset first.
    pub fn start(&mut self) -> bool {
        if self.is_running || self.remaining_seconds <= 0 {
            return false;
        }
        self.is_running = true;
        debug!("Countdown started at {}s", self.remaining_seconds);
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.is_running = false;
        debug!("Countdown paused at {}s", self.remaining_seconds);
        true
    }

    pub fn toggle(&mut self) -> bool {
        if self.is_running {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_seconds = i64::from(self.total_seconds);
        debug!("Countdown reset to {}s", self.total_seconds);
    }

    /// Hard reset onto a new total, regardless of the current phase.
    pub fn reconfigure(&mut self, total_seconds: u32) {
        self.total_seconds = total_seconds;
        self.reset();
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Ignored;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds <= 0 {
            self.is_running = false;
            info!("Countdown of {}s completed", self.total_seconds);
            TickOutcome::Completed
        } else {
            TickOutcome::Continued
        }
    }

    /// Switch between the numeric readout and the plain indicator.
    pub fn toggle_numbers_visible(&mut self) {
        self.numbers_visible = !self.numbers_visible;
    }

    pub fn tier(&self) -> UrgencyTier {
        UrgencyTier::for_remaining(self.remaining_seconds)
    }

    /// Fraction of the total still remaining, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        (self.remaining_seconds as f64 / f64::from(self.total_seconds)).clamp(0.0, 1.0)
    }

    pub fn formatted(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

/// Format seconds as `m:ss`, e.g. `75` -> `"1:15"`.
///
/// Minutes are not padded. Negative values keep a leading minus sign in
/// front of the formatted magnitude.
pub fn format_time(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let magnitude = seconds.unsigned_abs();
    format!("{}{}:{:02}", sign, magnitude / 60, magnitude % 60)
}
