// SPDX-License-Identifier: MPL-2.0
//! Frame-clock timer adapter implementing the [`Scheduler`] port.

use crate::application::coordinator::Event;
use crate::application::port::{Scheduler, TimerId};
use std::time::{Duration, Instant};

/// Deadline list checked on every tick.
///
/// Deadlines are computed from the last instant the scheduler saw, either
/// through [`sync`](Self::sync) or [`tick`](Self::tick). Hosts should sync
/// right before handing control to the coordinator.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    now: Instant,
    deadlines: Vec<(Instant, TimerId)>,
}

impl TickScheduler {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            deadlines: Vec::new(),
        }
    }

    /// Updates the scheduler's notion of the current time without firing.
    pub fn sync(&mut self, now: Instant) {
        self.now = self.now.max(now);
    }

    /// Advances to `now` and returns a `TimerFired` event for each elapsed
    /// timer, earliest deadline first.
    pub fn tick(&mut self, now: Instant) -> Vec<Event> {
        self.sync(now);
        let now = self.now;

        let mut due: Vec<(Instant, TimerId)> = Vec::new();
        self.deadlines.retain(|&(deadline, timer)| {
            if deadline <= now {
                due.push((deadline, timer));
                false
            } else {
                true
            }
        });
        due.sort();

        due.into_iter()
            .map(|(_, timer)| {
                tracing::trace!(timer = timer.value(), "timer elapsed");
                Event::TimerFired(timer)
            })
            .collect()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().map(|&(deadline, _)| deadline).min()
    }

    /// Number of armed timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.deadlines.is_empty()
    }
}

impl Scheduler for TickScheduler {
    fn schedule(&mut self, delay: Duration, timer: TimerId) {
        // Re-arming an id replaces its deadline.
        self.deadlines.retain(|&(_, armed)| armed != timer);
        self.deadlines.push((self.now + delay, timer));
    }

    fn cancel(&mut self, timer: TimerId) {
        self.deadlines.retain(|&(_, armed)| armed != timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn timer_fires_once_after_delay() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(t0);
        scheduler.schedule(ms(100), TimerId::new(1));

        assert!(scheduler.tick(t0 + ms(99)).is_empty());
        assert_eq!(
            scheduler.tick(t0 + ms(100)),
            vec![Event::TimerFired(TimerId::new(1))]
        );
        assert!(scheduler.tick(t0 + ms(500)).is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(t0);
        scheduler.schedule(ms(10), TimerId::new(1));
        scheduler.cancel(TimerId::new(1));

        assert!(scheduler.tick(t0 + ms(1000)).is_empty());
    }

    #[test]
    fn cancel_unknown_timer_is_ignored() {
        let mut scheduler = TickScheduler::new(Instant::now());
        scheduler.schedule(ms(10), TimerId::new(1));
        scheduler.cancel(TimerId::new(7));
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn due_timers_fire_in_deadline_order() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(t0);
        scheduler.schedule(ms(300), TimerId::new(1));
        scheduler.schedule(ms(100), TimerId::new(2));
        scheduler.schedule(ms(200), TimerId::new(3));

        assert_eq!(
            scheduler.tick(t0 + ms(1000)),
            vec![
                Event::TimerFired(TimerId::new(2)),
                Event::TimerFired(TimerId::new(3)),
                Event::TimerFired(TimerId::new(1)),
            ]
        );
    }

    #[test]
    fn deadline_is_relative_to_last_sync() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(t0);
        scheduler.sync(t0 + ms(1000));
        scheduler.schedule(ms(100), TimerId::new(1));

        assert_eq!(scheduler.next_deadline(), Some(t0 + ms(1100)));
        assert!(scheduler.tick(t0 + ms(1050)).is_empty());
    }

    #[test]
    fn clock_never_moves_backwards() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(t0 + ms(500));
        scheduler.sync(t0);
        scheduler.schedule(ms(100), TimerId::new(1));
        assert_eq!(scheduler.next_deadline(), Some(t0 + ms(600)));
    }

    #[test]
    fn rescheduling_same_id_replaces_deadline() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(t0);
        scheduler.schedule(ms(100), TimerId::new(1));
        scheduler.schedule(ms(400), TimerId::new(1));

        assert_eq!(scheduler.pending(), 1);
        assert!(scheduler.tick(t0 + ms(200)).is_empty());
    }
}
