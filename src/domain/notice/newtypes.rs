// SPDX-License-Identifier: MPL-2.0
//! Notice newtypes.
//!
//! Type-safe wrappers that keep notice values within valid ranges so the
//! coordinator never has to re-validate caller input.

use std::time::Duration;

// =============================================================================
// Duration Bounds
// =============================================================================

/// Display duration bounds, in seconds.
pub mod duration_bounds {
    /// Shortest time a notice stays on screen once its entry completes.
    pub const MIN_SECS: f64 = 0.5;
    /// Longest accepted display time (one hour).
    pub const MAX_SECS: f64 = 3600.0;
    /// Display time used when the caller does not pick one.
    pub const DEFAULT_SECS: f64 = 4.0;
}

// =============================================================================
// NoticeDuration
// =============================================================================

/// How long a notice stays visible before it auto-dismisses.
///
/// Construction never fails. Zero, negative and too-small values are raised
/// to [`duration_bounds::MIN_SECS`], values above the maximum (including
/// positive infinity) are lowered to [`duration_bounds::MAX_SECS`], and NaN
/// falls back to the default.
///
/// # Example
///
/// ```
/// use iced_notice::domain::notice::NoticeDuration;
///
/// assert_eq!(NoticeDuration::from_secs_f64(-3.0).as_secs_f64(), 0.5);
/// assert_eq!(NoticeDuration::default().as_secs_f64(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NoticeDuration(f64);

impl NoticeDuration {
    /// Creates a duration from seconds, normalizing invalid input.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(duration_bounds::MIN_SECS, duration_bounds::MAX_SECS))
    }

    /// Creates a duration from a [`Duration`], normalizing it.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self::from_secs_f64(duration.as_secs_f64())
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }

    /// Returns true if the value sits at the lower bound.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= duration_bounds::MIN_SECS
    }

    /// Returns true if the value sits at the upper bound.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= duration_bounds::MAX_SECS
    }
}

impl Default for NoticeDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_SECS)
    }
}

impl From<Duration> for NoticeDuration {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

// =============================================================================
// EdgeInsets
// =============================================================================

/// Padding around a piece of banner content, in logical pixels.
///
/// Negative and non-finite components are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    /// Creates insets, sanitizing each component.
    #[must_use]
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        let side = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            top: side(top),
            left: side(left),
            bottom: side(bottom),
            right: side(right),
        }
    }

    /// Insets applied around the message text by default.
    #[must_use]
    pub fn text_default() -> Self {
        Self::new(0.0, 5.0, 0.0, 5.0)
    }

    /// Insets applied around the image by default.
    #[must_use]
    pub fn image_default() -> Self {
        Self::new(0.0, 5.0, 0.0, 0.0)
    }

    /// Left plus right.
    #[must_use]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_default_is_four_seconds() {
        assert_eq!(NoticeDuration::default().as_secs_f64(), 4.0);
    }

    #[test]
    fn zero_duration_is_raised_to_minimum() {
        let d = NoticeDuration::from_secs_f64(0.0);
        assert_eq!(d.as_secs_f64(), duration_bounds::MIN_SECS);
        assert!(d.is_min());
    }

    #[test]
    fn negative_duration_is_raised_to_minimum() {
        let d = NoticeDuration::from_secs_f64(-12.5);
        assert_eq!(d.as_secs_f64(), duration_bounds::MIN_SECS);
    }

    #[test]
    fn nan_duration_falls_back_to_default() {
        assert_eq!(NoticeDuration::from_secs_f64(f64::NAN), NoticeDuration::default());
    }

    #[test]
    fn infinite_duration_is_lowered_to_maximum() {
        let d = NoticeDuration::from_secs_f64(f64::INFINITY);
        assert!(d.is_max());
        assert_eq!(d.as_secs_f64(), duration_bounds::MAX_SECS);
    }

    #[test]
    fn valid_duration_is_kept() {
        let d = NoticeDuration::new(Duration::from_millis(2500));
        assert_eq!(d.as_duration(), Duration::from_millis(2500));
    }

    #[test]
    fn default_insets_match_banner_layout() {
        assert_eq!(EdgeInsets::text_default().horizontal(), 10.0);
        assert_eq!(EdgeInsets::image_default().left, 5.0);
        assert_eq!(EdgeInsets::image_default().right, 0.0);
    }

    #[test]
    fn insets_sanitize_negative_and_nan() {
        let insets = EdgeInsets::new(-1.0, f32::NAN, 2.0, f32::INFINITY);
        assert_eq!(insets, EdgeInsets::new(0.0, 0.0, 2.0, 0.0));
        assert_eq!(insets.vertical(), 2.0);
    }
}
