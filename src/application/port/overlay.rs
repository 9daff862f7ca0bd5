// SPDX-License-Identifier: MPL-2.0
//! Host overlay port definition.

use crate::domain::notice::Size;

/// Port for the always-on-top, full-display surface hosting banners.
///
/// # Lifecycle
///
/// 1. [`create_overlay`](Self::create_overlay) when the first notice is about
///    to be presented
/// 2. [`show_overlay`](Self::show_overlay) as each notice is attached
/// 3. [`hide_overlay`](Self::hide_overlay) then
///    [`release_overlay`](Self::release_overlay) once the queue drains
///
/// Implementations must let input outside hosted banner content pass
/// through to the UI underneath.
pub trait OverlayHost {
    /// Allocates the overlay and returns its bounds.
    fn create_overlay(&mut self) -> Size;

    fn show_overlay(&mut self);

    fn hide_overlay(&mut self);

    /// Drops the overlay. It is created again on the next presentation.
    fn release_overlay(&mut self);
}
