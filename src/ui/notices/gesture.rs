// SPDX-License-Identifier: MPL-2.0
//! Swipe-up and tap recognition for a single banner.
//!
//! The tracker only sees pointer positions relative to the banner. It emits
//! at most one [`Gesture`] per press.

use crate::application::port::Gesture;
use crate::domain::notice::Point;

/// Upward travel, in logical pixels, that turns a drag into a swipe.
pub const SWIPE_THRESHOLD: f32 = 24.0;

/// Maximum travel, in logical pixels, for a press/release to count as a tap.
pub const TAP_SLOP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pressed { start: Point, travel: f32 },
    /// A gesture was already reported for this press.
    Consumed,
}

/// Pointer state machine for one banner.
#[derive(Debug, Clone, Copy)]
pub struct GestureTracker {
    cursor: Option<Point>,
    phase: Phase,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self {
            cursor: None,
            phase: Phase::Idle,
        }
    }
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer went down at the last known cursor position.
    pub fn press(&mut self) {
        self.phase = match self.cursor {
            Some(start) => Phase::Pressed { start, travel: 0.0 },
            None => Phase::Pressed {
                start: Point::ORIGIN,
                travel: 0.0,
            },
        };
    }

    /// Pointer moved to `position`. Returns a swipe once upward travel
    /// crosses [`SWIPE_THRESHOLD`].
    pub fn moved(&mut self, position: Point) -> Option<Gesture> {
        self.cursor = Some(position);
        let Phase::Pressed { start, travel } = self.phase else {
            return None;
        };

        let dx = position.x - start.x;
        let dy = position.y - start.y;
        let travel = travel.max((dx * dx + dy * dy).sqrt());

        if start.y - position.y >= SWIPE_THRESHOLD {
            self.phase = Phase::Consumed;
            Some(Gesture::SwipeUp)
        } else {
            self.phase = Phase::Pressed { start, travel };
            None
        }
    }

    /// Pointer went up. Returns a tap when the press barely moved.
    pub fn release(&mut self) -> Option<Gesture> {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Pressed { travel, .. } if travel <= TAP_SLOP => Some(Gesture::Tap),
            _ => None,
        }
    }

    /// Pointer left the banner; any press in progress is abandoned.
    pub fn exited(&mut self) {
        self.cursor = None;
        self.phase = Phase::Idle;
    }

    /// Forgets everything, e.g. when a new banner is attached.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Pressed { .. })
    }
}
