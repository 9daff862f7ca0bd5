// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use super::config::Config;
use crate::domain::notice::NoticeCategory;
use crate::ui::notices;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The draft notice text changed.
    MessageChanged(String),
    /// The duration slider moved (seconds).
    DurationChanged(f32),
    /// Queue a notice of the given category built from the draft.
    Add(NoticeCategory),
    /// Show the next queued notice.
    Fire,
    /// Post a notice from a background thread through a `NoticeSender`.
    SendFromThread,
    ClearPending,
    DismissCurrent,
    Notices(notices::Message),
}

/// Runtime flags passed from `main.rs` to the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Loaded configuration.
    pub config: Config,
    /// Set when the config file existed but could not be read.
    pub config_warning: Option<String>,
}
