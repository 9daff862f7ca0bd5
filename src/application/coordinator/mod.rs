// SPDX-License-Identifier: MPL-2.0
//! Notice queueing and presentation.
//!
//! The [`NoticeCoordinator`] owns a FIFO queue of pending notices and a
//! single active slot. It shows at most one banner at a time:
//!
//! ```text
//!            fire()                 entry done          timer / gesture
//!   Idle ───────────────► Entering ───────────► Shown ─────────────────► Leaving
//!    ▲                                                                       │
//!    │  queue empty: release overlay                exit done                │
//!    └───────────────────────────────────────────────────────────────────────┤
//!                         queue not empty: present next (no fire() needed)   │
//!                                       Entering ◄───────────────────────────┘
//! ```
//!
//! All methods run on one logical timeline (the UI thread). Collaborators
//! never call back into the coordinator; they report completion as an
//! [`Event`] passed to [`NoticeCoordinator::handle`]. Other threads post
//! through a [`NoticeSender`].
//!
//! # Example
//!
//! ```ignore
//! let mut coordinator = NoticeCoordinator::new(backend, CoordinatorSettings::default());
//! coordinator.fire_notice(2.0, NoticeCategory::Info, "hello", None);
//! // ... later, from the event loop:
//! coordinator.handle(Event::AnimationFinished { notice, kind: TransitionKind::Entry });
//! ```

mod event;
mod inbox;
mod settings;

pub use event::{Event, State};
pub use inbox::{NoticeSender, Request};
pub use settings::{CoordinatorSettings, DEFAULT_ENTRY_DURATION, DEFAULT_EXIT_DURATION};

use crate::application::port::{
    Backend, DismissRequest, TimerId, Transition, TransitionKind,
};
use crate::domain::notice::{
    Notice, NoticeCategory, NoticeDuration, NoticeId, NoticeImage, Point, Rect, Size,
};
use std::collections::VecDeque;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace, warn};

/// The notice currently occupying the active slot, with its resting frame.
#[derive(Debug)]
struct Active {
    notice: Notice,
    frame: Rect,
}

impl Active {
    fn id(&self) -> NoticeId {
        self.notice.id()
    }
}

/// The active slot. Exactly one authoritative presentation state.
#[derive(Debug, Default)]
enum Slot {
    #[default]
    Empty,
    Entering(Active),
    Shown(Active),
    Leaving(Active),
}

impl Slot {
    fn active(&self) -> Option<&Active> {
        match self {
            Slot::Empty => None,
            Slot::Entering(active) | Slot::Shown(active) | Slot::Leaving(active) => Some(active),
        }
    }

    fn active_mut(&mut self) -> Option<&mut Active> {
        match self {
            Slot::Empty => None,
            Slot::Entering(active) | Slot::Shown(active) | Slot::Leaving(active) => Some(active),
        }
    }

    fn state(&self) -> State {
        match self {
            Slot::Empty => State::Idle,
            Slot::Entering(_) | Slot::Shown(_) => State::Showing,
            Slot::Leaving(_) => State::Dismissing,
        }
    }
}

/// Queues notices and presents them one at a time through a [`Backend`].
///
/// One instance is meant to live for the whole process, owned by the UI
/// layer and passed to whoever needs it. Tests build a fresh one each time.
pub struct NoticeCoordinator<B: Backend> {
    backend: B,
    settings: CoordinatorSettings,
    queue: VecDeque<Notice>,
    slot: Slot,
    /// Overlay bounds; `Some` exactly while the overlay exists.
    overlay: Option<Size>,
    armed: Option<TimerId>,
    next_timer: TimerId,
    /// Last notice whose exit completed; late events may still name it.
    retired: Option<NoticeId>,
    tx: UnboundedSender<Request>,
    rx: UnboundedReceiver<Request>,
}

impl<B: Backend> std::fmt::Debug for NoticeCoordinator<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoticeCoordinator")
            .field("state", &self.state())
            .field("active", &self.active().map(Notice::id))
            .field("pending", &self.queue.len())
            .field("overlay", &self.overlay)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}

impl<B: Backend> NoticeCoordinator<B> {
    /// Creates an idle coordinator driving `backend`.
    pub fn new(backend: B, settings: CoordinatorSettings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            backend,
            settings,
            queue: VecDeque::new(),
            slot: Slot::Empty,
            overlay: None,
            armed: None,
            next_timer: TimerId::new(0),
            retired: None,
            tx,
            rx,
        }
    }

    // =========================================================================
    // Public API
    // =========================================================================

    /// Appends `notice` to the tail of the queue. Nothing is shown until
    /// [`fire`](Self::fire).
    ///
    /// A notice whose id is already queued, active or just retired (a clone
    /// enqueued twice) is given a fresh id, so events for one presentation
    /// never reach another.
    pub fn enqueue(&mut self, notice: Notice) {
        let notice = if self.is_known(notice.id()) {
            let previous = notice.id();
            let notice = notice.with_fresh_id();
            debug!(previous = %previous, notice = %notice.id(), "duplicate notice id replaced");
            notice
        } else {
            notice
        };
        if let Some(max) = self.settings.max_pending {
            if self.queue.len() >= max {
                warn!(
                    notice = %notice.id(),
                    max_pending = max,
                    "notice queue is full, dropping notice"
                );
                return;
            }
        }
        debug!(notice = %notice.id(), pending = self.queue.len() + 1, "notice enqueued");
        self.queue.push_back(notice);
    }

    /// Builds a notice from primitive fields and enqueues it.
    pub fn enqueue_with(
        &mut self,
        duration_secs: f64,
        category: NoticeCategory,
        message: impl Into<String>,
        image: Option<NoticeImage>,
    ) {
        self.enqueue(Notice::from_parts(duration_secs, category, message, image));
    }

    /// Presents the head of the queue if nothing is active.
    ///
    /// A no-op when a notice is already active or when the queue is empty.
    pub fn fire(&mut self) {
        if let Some(active) = self.slot.active() {
            trace!(active = %active.id(), "fire ignored, a notice is already active");
            return;
        }
        match self.queue.pop_front() {
            Some(next) => self.present(next),
            None => trace!("fire ignored, queue is empty"),
        }
    }

    /// Enqueues a notice built from primitive fields, then fires.
    pub fn fire_notice(
        &mut self,
        duration_secs: f64,
        category: NoticeCategory,
        message: impl Into<String>,
        image: Option<NoticeImage>,
    ) {
        self.enqueue_with(duration_secs, category, message, image);
        self.fire();
    }

    /// Feeds a collaborator completion or user gesture into the state machine.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::AnimationFinished {
                notice,
                kind: TransitionKind::Entry,
            } => self.on_entry_finished(notice),
            Event::AnimationFinished {
                notice,
                kind: TransitionKind::Exit,
            } => self.on_exit_finished(notice),
            Event::TimerFired(timer) => self.on_timer_fired(timer),
            Event::DismissRequested(request) => self.on_dismiss_requested(request),
            Event::OverlayResized(size) => self.on_overlay_resized(size),
        }
    }

    /// Returns a handle other threads can use to post notices.
    #[must_use]
    pub fn sender(&self) -> NoticeSender {
        NoticeSender::new(self.tx.clone())
    }

    /// Applies every request posted through a [`NoticeSender`], in order.
    ///
    /// Returns the number of requests applied.
    pub fn drain_inbox(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(request) = self.rx.try_recv() {
            applied += 1;
            match request {
                Request::Enqueue(notice) => self.enqueue(notice),
                Request::Fire => self.fire(),
                Request::FireNotice(notice) => {
                    self.enqueue(notice);
                    self.fire();
                }
                Request::ClearPending => {
                    self.clear_pending();
                }
            }
        }
        applied
    }

    /// Drops every pending notice. The active one, if any, is left alone.
    ///
    /// Returns how many notices were dropped.
    pub fn clear_pending(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        if dropped > 0 {
            debug!(dropped, "pending notices cleared");
        }
        dropped
    }

    /// Starts dismissing the active notice without waiting for its timer.
    ///
    /// Returns `false` when nothing is active or the notice is already leaving.
    pub fn dismiss_current(&mut self) -> bool {
        match &self.slot {
            Slot::Entering(active) | Slot::Shown(active) => {
                let id = active.id();
                self.dismiss(id);
                true
            }
            Slot::Empty | Slot::Leaving(_) => false,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> State {
        self.slot.state()
    }

    /// The notice in the active slot, whether entering, shown or leaving.
    #[must_use]
    pub fn active(&self) -> Option<&Notice> {
        self.slot.active().map(|active| &active.notice)
    }

    /// Resting frame of the active notice.
    #[must_use]
    pub fn active_frame(&self) -> Option<Rect> {
        self.slot.active().map(|active| active.frame)
    }

    /// Number of notices waiting in the queue.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pending notices, head first.
    pub fn pending_notices(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    #[must_use]
    pub fn overlay_bounds(&self) -> Option<Size> {
        self.overlay
    }

    /// The timer currently armed for the active notice.
    #[must_use]
    pub fn armed_timer(&self) -> Option<TimerId> {
        self.armed
    }

    /// Returns the notice under `point`, if any.
    ///
    /// Points outside the active banner fall through to the UI underneath.
    /// Hosts without per-widget input routing call this to decide whether a
    /// pointer event belongs to the banner; the iced layer gets the same
    /// pass-through from its `mouse_area` and does not need it.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<NoticeId> {
        self.overlay?;
        self.slot
            .active()
            .filter(|active| active.frame.contains(point))
            .map(Active::id)
    }

    #[must_use]
    pub fn settings(&self) -> &CoordinatorSettings {
        &self.settings
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn is_known(&self, id: NoticeId) -> bool {
        self.retired == Some(id)
            || self.slot.active().is_some_and(|active| active.id() == id)
            || self.queue.iter().any(|queued| queued.id() == id)
    }

    fn ensure_overlay(&mut self) -> Size {
        if let Some(bounds) = self.overlay {
            return bounds;
        }
        let bounds = self.backend.create_overlay().sanitized();
        debug!(width = bounds.width, height = bounds.height, "overlay created");
        self.overlay = Some(bounds);
        bounds
    }

    fn release_overlay(&mut self) {
        if self.overlay.take().is_some() {
            self.backend.hide_overlay();
            self.backend.release_overlay();
            debug!("queue drained, overlay released");
        }
    }

    fn measure(&self, notice: &Notice, bounds: Size) -> Rect {
        Rect::from_size(self.backend.measure(notice, bounds).sanitized())
    }

    fn present(&mut self, notice: Notice) {
        let bounds = self.ensure_overlay();
        let frame = self.measure(&notice, bounds);
        let id = notice.id();

        self.backend.attach(&notice, frame);
        self.backend.enable_gestures(id);
        self.backend.show_overlay();
        self.backend.animate(Transition {
            notice: id,
            kind: TransitionKind::Entry,
            from: -frame.size.height,
            to: 0.0,
            duration: self.settings.entry_duration,
        });

        debug!(
            notice = %id,
            height = frame.size.height,
            pending = self.queue.len(),
            "presenting notice"
        );
        self.slot = Slot::Entering(Active { notice, frame });
    }

    fn dismiss(&mut self, id: NoticeId) {
        let active = match std::mem::take(&mut self.slot) {
            Slot::Entering(active) | Slot::Shown(active) if active.id() == id => active,
            other => {
                trace!(notice = %id, state = %other.state(), "dismiss ignored");
                self.slot = other;
                return;
            }
        };

        // Invalidate first so a queued timer report can no longer reach us.
        self.cancel_timer();
        self.backend.disable_gestures(id);
        self.backend.animate(Transition {
            notice: id,
            kind: TransitionKind::Exit,
            from: 0.0,
            to: -active.frame.size.height,
            duration: self.settings.exit_duration,
        });

        debug!(notice = %id, "dismissing notice");
        self.slot = Slot::Leaving(active);
    }

    fn arm_timer(&mut self, duration: NoticeDuration) {
        self.cancel_timer();
        let timer = self.next_timer;
        self.next_timer = timer.next();
        self.backend.schedule(duration.as_duration(), timer);
        self.armed = Some(timer);
        trace!(timer = timer.value(), secs = duration.as_secs_f64(), "dismiss timer armed");
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.armed.take() {
            self.backend.cancel(timer);
            trace!(timer = timer.value(), "dismiss timer cancelled");
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn on_entry_finished(&mut self, id: NoticeId) {
        match std::mem::take(&mut self.slot) {
            Slot::Entering(active) if active.id() == id => {
                self.arm_timer(active.notice.duration());
                self.slot = Slot::Shown(active);
            }
            other => {
                trace!(notice = %id, state = %other.state(), "stale entry completion ignored");
                self.slot = other;
            }
        }
    }

    fn on_exit_finished(&mut self, id: NoticeId) {
        match std::mem::take(&mut self.slot) {
            Slot::Leaving(active) if active.id() == id => {
                self.backend.detach(id);
                self.retired = Some(id);
                debug!(notice = %id, "notice detached");
                match self.queue.pop_front() {
                    Some(next) => self.present(next),
                    None => self.release_overlay(),
                }
            }
            other => {
                trace!(notice = %id, state = %other.state(), "stale exit completion ignored");
                self.slot = other;
            }
        }
    }

    fn on_timer_fired(&mut self, timer: TimerId) {
        if self.armed != Some(timer) {
            trace!(timer = timer.value(), "stale timer ignored");
            return;
        }
        self.armed = None;
        if let Slot::Shown(active) = &self.slot {
            let id = active.id();
            self.dismiss(id);
        }
    }

    fn on_dismiss_requested(&mut self, request: DismissRequest) {
        debug!(notice = %request.notice, gesture = ?request.gesture, "dismiss gesture");
        self.dismiss(request.notice);
    }

    fn on_overlay_resized(&mut self, size: Size) {
        let size = size.sanitized();
        if self.overlay.is_none() {
            trace!("resize ignored, no overlay");
            return;
        }
        self.overlay = Some(size);

        let Some((id, frame)) = self
            .slot
            .active()
            .map(|active| (active.id(), self.measure(&active.notice, size)))
        else {
            return;
        };
        if let Some(active) = self.slot.active_mut() {
            active.frame = frame;
        }
        self.backend.resize(id, frame);
        debug!(notice = %id, height = frame.size.height, "notice re-measured");
    }
}
