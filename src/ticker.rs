//! Owner of the countdown's recurring tick.
//!
//! A [`TickSource`] hands out a handle that keeps a one-second tick alive
//! until it is dropped. [`CountdownTimer`] holds at most one such handle and
//! keeps it alive exactly while its state is running.

use crate::timer::{TickOutcome, TimerPhase, TimerState};
use log::debug;

/// Factory for cancellable periodic ticks.
///
/// Dropping the returned handle must cancel the tick before it can fire
/// again.
pub trait TickSource {
    type Handle;

    fn every_second(&mut self) -> Self::Handle;
}

pub struct CountdownTimer<S: TickSource> {
    state: TimerState,
    source: S,
    handle: Option<S::Handle>,
}

impl<S: TickSource> CountdownTimer<S> {
    pub fn new(total_seconds: u32, source: S) -> Self {
        Self {
            state: TimerState::new(total_seconds),
            source,
            handle: None,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn phase(&self) -> TimerPhase {
        self.state.phase()
    }

    pub fn has_pending_tick(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(&mut self) -> bool {
        let changed = self.state.start();
        self.sync_tick_source();
        changed
    }

    pub fn pause(&mut self) -> bool {
        let changed = self.state.pause();
        self.sync_tick_source();
        changed
    }

    pub fn toggle(&mut self) -> bool {
        let changed = self.state.toggle();
        self.sync_tick_source();
        changed
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.sync_tick_source();
    }

    pub fn reconfigure(&mut self, total_seconds: u32) {
        self.state.reconfigure(total_seconds);
        self.sync_tick_source();
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.state.tick();
        self.sync_tick_source();
        outcome
    }

    pub fn toggle_numbers_visible(&mut self) {
        self.state.toggle_numbers_visible();
    }

    // Running <=> handle present. Creating or dropping the handle happens
    // nowhere else.
    fn sync_tick_source(&mut self) {
        match (self.state.is_running(), self.handle.is_some()) {
            (true, false) => {
                debug!("Scheduling countdown tick");
                self.handle = Some(self.source.every_second());
            }
            (false, true) => {
                debug!("Cancelling countdown tick");
                self.handle = None;
            }
            _ => {}
        }
    }
}
