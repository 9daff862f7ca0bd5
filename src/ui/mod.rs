// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notices`] - Banner notices: backend, surface, widget and gestures
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notices;
pub mod styles;
pub mod theming;
