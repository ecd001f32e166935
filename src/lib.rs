//! Core model for the Oratio speech practice timer.
//!
//! Everything in this crate is plain data and pure transitions so it can be
//! exercised without a browser. The Yew shell in `main.rs` renders these
//! types and feeds user input and timer ticks back into them.

pub mod picker;
pub mod session;
pub mod speech;
pub mod ticker;
pub mod timer;
pub mod topics;

pub use picker::TopicPicker;
pub use session::{Screen, SessionState};
pub use speech::{duration_for, duration_minutes_for_name, SelectionError, SpeechType};
pub use ticker::{CountdownTimer, TickSource};
pub use timer::{format_time, TickOutcome, TimerPhase, TimerState, UrgencyTier};
pub use topics::{topics_for, Theme, Topic};

/// Domain constants shared by the model and the browser shell.
pub mod defaults {
    /// Minutes used when a speech type cannot be resolved.
    pub const FALLBACK_DURATION_MINUTES: f64 = 2.5;
    /// Period of the countdown tick source.
    pub const TICK_INTERVAL_MS: u32 = 1_000;
    /// Remaining seconds at or below which the timer is critical.
    pub const CRITICAL_THRESHOLD_SECS: i64 = 30;
    /// Remaining seconds at or below which the timer is a warning.
    pub const WARNING_THRESHOLD_SECS: i64 = 60;
    /// Number of topics produced per theme.
    pub const TOPIC_BATCH_SIZE: usize = 5;
}

/// Convert a duration in (possibly fractional) minutes to whole seconds.
pub fn minutes_to_seconds(minutes: f64) -> u32 {
    if minutes.is_finite() && minutes > 0.0 {
        (minutes * 60.0).round() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_convert_to_whole_seconds() {
        assert_eq!(minutes_to_seconds(2.5), 150);
        assert_eq!(minutes_to_seconds(7.0), 420);
        assert_eq!(minutes_to_seconds(0.0), 0);
        assert_eq!(minutes_to_seconds(-1.0), 0);
        assert_eq!(minutes_to_seconds(f64::NAN), 0);
    }
}
