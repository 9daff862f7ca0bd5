// SPDX-License-Identifier: MPL-2.0
//! Coordinator tuning.

use std::time::Duration;

/// Default entry (slide-in) transition length.
pub const DEFAULT_ENTRY_DURATION: Duration = Duration::from_millis(350);

/// Default exit (slide-out) transition length.
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(250);

/// Timing and capacity settings for a [`NoticeCoordinator`](super::NoticeCoordinator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorSettings {
    /// Length of the slide-in transition.
    pub entry_duration: Duration,
    /// Length of the slide-out transition.
    pub exit_duration: Duration,
    /// Maximum number of pending notices; `None` means unbounded.
    ///
    /// When full, new notices are dropped and logged. The queue is never
    /// reordered to make room.
    pub max_pending: Option<usize>,
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self {
            entry_duration: DEFAULT_ENTRY_DURATION,
            exit_duration: DEFAULT_EXIT_DURATION,
            max_pending: None,
        }
    }
}

impl CoordinatorSettings {
    #[must_use]
    pub fn with_max_pending(mut self, max_pending: Option<usize>) -> Self {
        self.max_pending = max_pending;
        self
    }

    #[must_use]
    pub fn with_durations(mut self, entry: Duration, exit: Duration) -> Self {
        self.entry_duration = entry;
        self.exit_duration = exit;
        self
    }
}
