// SPDX-License-Identifier: MPL-2.0
//! Application layer: the notice coordinator and the ports it drives.
//!
//! - [`port`]: traits the environment implements (timers, animation,
//!   presentation surface, host overlay)
//! - [`coordinator`]: the queueing and presentation state machine

pub mod coordinator;
pub mod port;
