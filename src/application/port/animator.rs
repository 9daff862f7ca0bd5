// SPDX-License-Identifier: MPL-2.0
//! Animation port definition.

use crate::domain::notice::NoticeId;
use std::time::Duration;

/// Direction of a banner transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Sliding down into view.
    Entry,
    /// Sliding back up out of view.
    Exit,
}

/// A vertical slide of one attached banner.
///
/// Offsets are relative to the banner's resting position: `0.0` is fully
/// visible, `-height` is fully hidden above the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub notice: NoticeId,
    pub kind: TransitionKind,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
}

/// Port for animated transitions.
///
/// # Contract
///
/// - each started transition reports
///   [`Event::AnimationFinished`](crate::application::coordinator::Event::AnimationFinished)
///   exactly once, unless superseded
/// - starting a transition for a notice that is already animating supersedes
///   the running one; a superseded transition never reports completion
pub trait Animator {
    fn animate(&mut self, transition: Transition);
}
