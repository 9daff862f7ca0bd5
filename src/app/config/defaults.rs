// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notice**: Default display duration
//! - **Animation**: Entry and exit transition lengths
//! - **Layout**: Status bar height
//! - **Logging**: Default filter directive

use crate::application::coordinator::{DEFAULT_ENTRY_DURATION, DEFAULT_EXIT_DURATION};
use crate::domain::notice::duration_bounds;

// ==========================================================================
// Notice Defaults
// ==========================================================================

/// Default on-screen time of a notice, in seconds.
pub const DEFAULT_NOTICE_DURATION_SECS: f64 = duration_bounds::DEFAULT_SECS;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default slide-in length in milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub const DEFAULT_ENTRY_MS: u64 = DEFAULT_ENTRY_DURATION.as_millis() as u64;

/// Default slide-out length in milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub const DEFAULT_EXIT_MS: u64 = DEFAULT_EXIT_DURATION.as_millis() as u64;

/// Longest accepted transition, in milliseconds.
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Desktop windows have no status bar.
pub const DEFAULT_STATUS_BAR_HEIGHT: f32 = 0.0;

/// Tallest accepted status bar, in logical pixels.
pub const MAX_STATUS_BAR_HEIGHT: f32 = 200.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_defaults_match_coordinator() {
        assert_eq!(DEFAULT_ENTRY_MS, 350);
        assert_eq!(DEFAULT_EXIT_MS, 250);
        assert!(DEFAULT_ENTRY_MS <= MAX_TRANSITION_MS);
    }

    #[test]
    fn notice_duration_default_is_in_bounds() {
        assert!(DEFAULT_NOTICE_DURATION_SECS >= duration_bounds::MIN_SECS);
        assert!(DEFAULT_NOTICE_DURATION_SECS <= duration_bounds::MAX_SECS);
    }
}
