// SPDX-License-Identifier: MPL-2.0
//! Events fed back into the coordinator and its observable state.

use crate::application::port::{DismissRequest, TimerId, TransitionKind};
use crate::domain::notice::{NoticeId, Size};

/// Something the environment reports back to the coordinator.
///
/// Every asynchronous collaborator completes by producing one of these on
/// the coordinator's timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// An entry or exit transition reached its end.
    AnimationFinished {
        notice: NoticeId,
        kind: TransitionKind,
    },
    /// A scheduled timer elapsed.
    TimerFired(TimerId),
    /// The user swiped or tapped an attached banner.
    DismissRequested(DismissRequest),
    /// The overlay changed size (rotation, window resize).
    OverlayResized(Size),
}

/// Coarse presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Nothing attached, no overlay.
    #[default]
    Idle,
    /// One notice attached, entering or resting with its timer armed.
    Showing,
    /// The attached notice is playing its exit transition.
    Dismissing,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            State::Idle => "idle",
            State::Showing => "showing",
            State::Dismissing => "dismissing",
        };
        f.write_str(label)
    }
}
