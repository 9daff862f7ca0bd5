// SPDX-License-Identifier: MPL-2.0
//! Shared styles for the demo panel.

pub mod button;
pub mod container;

pub use button::{category as button_category, primary as button_primary};
