// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Offsets and measured sizes are `f32` results of easing and wrapping math,
//! so tests compare them with `approx` instead of `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};
