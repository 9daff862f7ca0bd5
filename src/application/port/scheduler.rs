// SPDX-License-Identifier: MPL-2.0
//! Timer port definition.

use std::time::Duration;

/// Identifies one armed timer.
///
/// The coordinator allocates these; a scheduler only echoes them back in
/// [`Event::TimerFired`](crate::application::coordinator::Event::TimerFired).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Port for one-shot, cancelable timers.
///
/// # Contract
///
/// - `schedule` must report `TimerFired(timer)` once, after at least `delay`
/// - after `cancel(timer)` returns, the timer should not fire; the
///   coordinator still ignores a late report for a timer it no longer holds
pub trait Scheduler {
    /// Arms `timer` to fire after `delay`.
    fn schedule(&mut self, delay: Duration, timer: TimerId);

    /// Cancels `timer`. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, timer: TimerId);
}
