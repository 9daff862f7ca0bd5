// SPDX-License-Identifier: MPL-2.0
//! Cross-thread entry point into a coordinator.
//!
//! A [`NoticeSender`] can be cloned and moved to any thread. Its requests
//! are queued on an unbounded channel and applied, in order, the next time
//! the owner of the coordinator calls
//! [`drain_inbox`](super::NoticeCoordinator::drain_inbox).

use crate::domain::notice::{Notice, NoticeCategory, NoticeImage};
use tokio::sync::mpsc::UnboundedSender;

/// A request marshaled onto the coordinator's timeline.
#[derive(Debug, Clone)]
pub enum Request {
    Enqueue(Notice),
    Fire,
    /// Enqueue and fire as one step; nothing can interleave.
    FireNotice(Notice),
    ClearPending,
}

/// Cloneable, `Send` handle for posting notices from any context.
///
/// Sending never fails from the caller's point of view. If the coordinator
/// is gone the request is dropped and logged.
#[derive(Debug, Clone)]
pub struct NoticeSender {
    tx: UnboundedSender<Request>,
}

impl NoticeSender {
    pub(super) fn new(tx: UnboundedSender<Request>) -> Self {
        Self { tx }
    }

    fn post(&self, request: Request) {
        if let Err(err) = self.tx.send(request) {
            tracing::debug!(request = ?err.0, "notice coordinator is gone, request dropped");
        }
    }

    pub fn enqueue(&self, notice: Notice) {
        self.post(Request::Enqueue(notice));
    }

    pub fn enqueue_with(
        &self,
        duration_secs: f64,
        category: NoticeCategory,
        message: impl Into<String>,
        image: Option<NoticeImage>,
    ) {
        self.enqueue(Notice::from_parts(duration_secs, category, message, image));
    }

    pub fn fire(&self) {
        self.post(Request::Fire);
    }

    pub fn fire_notice(
        &self,
        duration_secs: f64,
        category: NoticeCategory,
        message: impl Into<String>,
        image: Option<NoticeImage>,
    ) {
        self.post(Request::FireNotice(Notice::from_parts(
            duration_secs,
            category,
            message,
            image,
        )));
    }

    pub fn clear_pending(&self) {
        self.post(Request::ClearPending);
    }
}
