// SPDX-License-Identifier: MPL-2.0
//! `iced_notice` shows transient banner notices, one at a time, on top of an
//! Iced window.
//!
//! Notices are queued, then presented in FIFO order: each slides in from the
//! top edge, stays for its duration, and slides out before the next one
//! appears. A swipe up or a tap dismisses the visible banner early.
//!
//! # Layers
//!
//! - [`domain`] - notice records, categories, geometry and banner layout
//! - [`application`] - the platform-neutral coordinator and its ports
//! - [`infrastructure`] - frame-clock scheduler and animator
//! - [`ui`] - iced widgets, styles and the [`NoticeCenter`](ui::notices::NoticeCenter)
//! - [`app`] - the demo application, its config and paths

#![doc(html_root_url = "https://docs.rs/iced_notice/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
