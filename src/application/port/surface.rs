// SPDX-License-Identifier: MPL-2.0
//! Presentation surface port definition.
//!
//! The surface turns a [`Notice`] into something visible. The coordinator
//! only sees its geometry contract and its dismiss signal.

use crate::domain::notice::{Notice, NoticeId, Rect, Size};

/// User gesture that asks for a banner to go away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SwipeUp,
    Tap,
}

/// A dismiss signal raised by the surface for one attached notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissRequest {
    pub notice: NoticeId,
    pub gesture: Gesture,
}

impl DismissRequest {
    #[must_use]
    pub fn new(notice: NoticeId, gesture: Gesture) -> Self {
        Self { notice, gesture }
    }
}

/// Port for rendering a single banner.
///
/// # Contract
///
/// - [`measure`](Self::measure) works before attachment; the width of the
///   result is the available width and the height is
///   `max(content, minimum banner height)`, capped at the available height
/// - between [`enable_gestures`](Self::enable_gestures) and
///   [`disable_gestures`](Self::disable_gestures) a swipe-up or tap yields one
///   [`DismissRequest`] for that notice
/// - [`resize`](Self::resize) only ever targets the attached notice
pub trait PresentationSurface {
    /// Returns the size `notice` needs within `available`.
    fn measure(&self, notice: &Notice, available: Size) -> Size;

    /// Mounts `notice` into the overlay at `frame`.
    fn attach(&mut self, notice: &Notice, frame: Rect);

    /// Applies a new frame after the overlay changed size.
    fn resize(&mut self, notice: NoticeId, frame: Rect);

    /// Unmounts `notice`.
    fn detach(&mut self, notice: NoticeId);

    fn enable_gestures(&mut self, notice: NoticeId);

    fn disable_gestures(&mut self, notice: NoticeId);
}
