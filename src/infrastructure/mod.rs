// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port` that do not depend on a GUI toolkit. Both adapters are
//! driven by an external frame clock: the host calls `tick(now)` and feeds the
//! returned events into the coordinator.
//!
//! # Available Adapters
//!
//! - [`tick_scheduler`]: deadline-based timers (implements [`Scheduler`])
//! - [`tick_animator`]: eased vertical slides (implements [`Animator`])
//!
//! # Design Notes
//!
//! - Neither adapter reads the system clock; `now` is always passed in, so
//!   tests can advance time by hand
//! - Completions are returned from `tick`, never delivered re-entrantly
//!
//! [`Scheduler`]: crate::application::port::Scheduler
//! [`Animator`]: crate::application::port::Animator

pub mod tick_animator;
pub mod tick_scheduler;

pub use tick_animator::TickAnimator;
pub use tick_scheduler::TickScheduler;
