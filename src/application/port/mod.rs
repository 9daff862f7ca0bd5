// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The notice coordinator never talks to a clock, an animation engine or a
//! window directly. It drives these traits, and the environment reports the
//! outcome back as coordinator events.
//!
//! # Available Ports
//!
//! - [`scheduler`]: cancelable one-shot timers
//! - [`animator`]: animated vertical transitions with a completion event
//! - [`surface`]: measuring, attaching and detaching a banner, gesture hookup
//! - [`overlay`]: the always-on-top host surface
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Completion is never a callback: the adapter later feeds an
//!   [`Event`](crate::application::coordinator::Event) into
//!   [`NoticeCoordinator::handle`](crate::application::coordinator::NoticeCoordinator::handle)
//! - Methods are infallible; adapters absorb their own failures
//!
//! # Example
//!
//! ```ignore
//! use iced_notice::application::port::{Scheduler, TimerId};
//! use std::time::Duration;
//!
//! fn rearm(scheduler: &mut impl Scheduler, old: TimerId, new: TimerId) {
//!     scheduler.cancel(old);
//!     scheduler.schedule(Duration::from_secs(4), new);
//! }
//! ```

pub mod animator;
pub mod overlay;
pub mod scheduler;
pub mod surface;

pub use animator::{Animator, Transition, TransitionKind};
pub use overlay::OverlayHost;
pub use scheduler::{Scheduler, TimerId};
pub use surface::{DismissRequest, Gesture, PresentationSurface};

/// Everything the coordinator needs from its environment.
///
/// Implemented automatically for any type that implements all four ports.
pub trait Backend: Scheduler + Animator + PresentationSurface + OverlayHost {}

impl<T> Backend for T where T: Scheduler + Animator + PresentationSurface + OverlayHost {}
