// SPDX-License-Identifier: MPL-2.0
//! Frame-clock animation adapter implementing the [`Animator`] port.
//!
//! Each notice has at most one running transition. Starting a new one for
//! the same notice supersedes the old one, which then never completes; the
//! new slide starts from wherever the banner currently is.

use crate::application::coordinator::Event;
use crate::application::port::{Animator, Transition};
use crate::domain::notice::NoticeId;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Running {
    transition: Transition,
    started: Instant,
}

impl Running {
    fn progress(&self, now: Instant) -> f32 {
        let total = self.transition.duration.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / total).clamp(0.0, 1.0)
    }

    fn offset(&self, now: Instant) -> f32 {
        let t = ease_out_cubic(self.progress(now));
        let Transition { from, to, .. } = self.transition;
        from + (to - from) * t
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.transition.duration
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Eased vertical slides advanced by an external clock.
#[derive(Debug, Clone)]
pub struct TickAnimator {
    now: Instant,
    running: HashMap<NoticeId, Running>,
    /// Offsets of notices whose last transition has completed.
    settled: HashMap<NoticeId, f32>,
}

impl TickAnimator {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            running: HashMap::new(),
            settled: HashMap::new(),
        }
    }

    /// Updates the animator's notion of the current time without completing
    /// anything.
    pub fn sync(&mut self, now: Instant) {
        self.now = self.now.max(now);
    }

    /// Advances to `now` and returns an `AnimationFinished` event for each
    /// transition that reached its end, ordered by notice.
    pub fn tick(&mut self, now: Instant) -> Vec<Event> {
        self.sync(now);
        let now = self.now;

        let mut done: Vec<Transition> = self
            .running
            .values()
            .filter(|running| running.is_done(now))
            .map(|running| running.transition)
            .collect();
        done.sort_by_key(|transition| transition.notice);

        done.into_iter()
            .map(|transition| {
                self.running.remove(&transition.notice);
                self.settled.insert(transition.notice, transition.to);
                Event::AnimationFinished {
                    notice: transition.notice,
                    kind: transition.kind,
                }
            })
            .collect()
    }

    /// Current vertical offset of `notice`, or `None` if it was never animated.
    #[must_use]
    pub fn offset(&self, notice: NoticeId) -> Option<f32> {
        self.running
            .get(&notice)
            .map(|running| running.offset(self.now))
            .or_else(|| self.settled.get(&notice).copied())
    }

    /// True while any transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Drops every trace of `notice`. A running transition is abandoned
    /// without completing.
    pub fn forget(&mut self, notice: NoticeId) {
        self.running.remove(&notice);
        self.settled.remove(&notice);
    }
}

impl Animator for TickAnimator {
    fn animate(&mut self, transition: Transition) {
        let now = self.now;
        let transition = match self.running.get(&transition.notice) {
            Some(current) => retarget(transition, current.offset(now)),
            None => transition,
        };
        tracing::trace!(
            notice = %transition.notice,
            kind = ?transition.kind,
            from = transition.from,
            to = transition.to,
            "transition started"
        );
        self.settled.remove(&transition.notice);
        self.running.insert(
            transition.notice,
            Running {
                transition,
                started: now,
            },
        );
    }
}

/// Restarts `next` from `position`, shortening it in proportion to the
/// distance left to cover.
fn retarget(next: Transition, position: f32) -> Transition {
    let full = (next.to - next.from).abs();
    let remaining = (next.to - position).abs();
    let duration = if full > f32::EPSILON {
        let ratio = (remaining / full).clamp(0.0, 1.0);
        next.duration.mul_f64(f64::from(ratio))
    } else {
        next.duration
    };
    Transition {
        from: position,
        duration,
        ..next
    }
}
