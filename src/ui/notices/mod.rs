// SPDX-License-Identifier: MPL-2.0
//! Banner notices for an iced window.
//!
//! [`NoticeCenter`] glues a [`NoticeCoordinator`] to the iced runtime: it
//! turns frame ticks, pointer input and window resizes into coordinator
//! events, and renders the attached banner as a top layer.
//!
//! # Components
//!
//! - [`backend`] - `IcedBackend`, the frame-clock backend behind the coordinator
//! - [`surface`] - `BannerSurface`, the window's banner and overlay bookkeeping
//! - [`banner`] - the banner widget
//! - [`gesture`] - swipe-up and tap recognition
//!
//! # Usage
//!
//! ```ignore
//! // In your view function, stack the banner over the app content
//! let content = Stack::new()
//!     .push(app_content)
//!     .push(self.notices.view().map(Message::Notices));
//!
//! // In your subscription
//! self.notices.subscription().map(Message::Notices)
//! ```

pub mod backend;
pub mod banner;
pub mod gesture;
pub mod surface;

pub use backend::IcedBackend;
pub use gesture::GestureTracker;
pub use surface::{AttachedBanner, BannerSurface, OverlayState};

use crate::application::coordinator::{
    CoordinatorSettings, Event, NoticeCoordinator, NoticeSender, State,
};
use crate::application::port::{DismissRequest, Gesture};
use crate::domain::notice::{
    BannerMetrics, Notice, NoticeCategory, NoticeId, NoticeImage, Point, Size,
};
use iced::widget::Space;
use iced::{event, time, window, Element, Length, Subscription};
use std::time::{Duration, Instant};

/// Tick interval while something is on screen or pending.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Tick interval while idle; only drains the cross-thread inbox.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Messages for banner state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame clock.
    Tick(Instant),
    /// Pointer went down on the banner.
    Pressed,
    /// Pointer moved over the banner (banner-relative position).
    Moved(Point),
    /// Pointer went up on the banner.
    Released,
    /// Pointer left the banner.
    Exited,
    /// The window changed size.
    Resized(Size),
}

/// Owns the coordinator for one window.
#[derive(Debug)]
pub struct NoticeCenter {
    coordinator: NoticeCoordinator<IcedBackend>,
    tracker: GestureTracker,
    /// Banner the tracker's state belongs to.
    tracked: Option<NoticeId>,
}

impl NoticeCenter {
    #[must_use]
    pub fn new(window: Size, metrics: BannerMetrics, settings: CoordinatorSettings) -> Self {
        let surface = BannerSurface::new(window, metrics);
        let backend = IcedBackend::new(surface, Instant::now());
        Self {
            coordinator: NoticeCoordinator::new(backend, settings),
            tracker: GestureTracker::new(),
            tracked: None,
        }
    }

    #[must_use]
    pub fn coordinator(&self) -> &NoticeCoordinator<IcedBackend> {
        &self.coordinator
    }

    /// Handle for posting notices from other threads or tasks.
    #[must_use]
    pub fn sender(&self) -> NoticeSender {
        self.coordinator.sender()
    }

    pub fn enqueue(&mut self, notice: Notice) {
        self.coordinator.enqueue(notice);
    }

    pub fn enqueue_with(
        &mut self,
        duration_secs: f64,
        category: NoticeCategory,
        message: impl Into<String>,
        image: Option<NoticeImage>,
    ) {
        self.coordinator
            .enqueue_with(duration_secs, category, message, image);
    }

    pub fn fire(&mut self) {
        self.sync_clock();
        self.coordinator.fire();
    }

    pub fn fire_notice(
        &mut self,
        duration_secs: f64,
        category: NoticeCategory,
        message: impl Into<String>,
        image: Option<NoticeImage>,
    ) {
        self.sync_clock();
        self.coordinator
            .fire_notice(duration_secs, category, message, image);
    }

    pub fn clear_pending(&mut self) -> usize {
        self.coordinator.clear_pending()
    }

    pub fn dismiss_current(&mut self) -> bool {
        self.sync_clock();
        self.coordinator.dismiss_current()
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.coordinator.state()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.coordinator.pending()
    }

    /// The banner currently mounted, if any.
    #[must_use]
    pub fn attached(&self) -> Option<&AttachedBanner> {
        self.coordinator.backend().surface().attached()
    }

    /// Current slide offset of the attached banner.
    #[must_use]
    pub fn offset(&self) -> Option<f32> {
        let banner = self.attached()?;
        let offset = self
            .coordinator
            .backend()
            .animator()
            .offset(banner.notice.id())
            .unwrap_or(-banner.frame.size.height);
        Some(offset)
    }

    /// Handles a banner message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::Pressed => {
                self.follow_attached();
                self.tracker.press();
            }
            Message::Moved(position) => {
                self.follow_attached();
                if let Some(gesture) = self.tracker.moved(position) {
                    self.gesture(gesture);
                }
            }
            Message::Released => {
                self.follow_attached();
                if let Some(gesture) = self.tracker.release() {
                    self.gesture(gesture);
                }
            }
            Message::Exited => self.tracker.exited(),
            Message::Resized(size) => {
                self.coordinator
                    .backend_mut()
                    .surface_mut()
                    .set_window_size(size);
                self.coordinator.handle(Event::OverlayResized(size));
            }
        }
    }

    /// Drains the inbox, then feeds every elapsed timer and finished
    /// transition into the coordinator.
    pub fn tick(&mut self, now: Instant) {
        self.coordinator.backend_mut().sync(now);
        self.coordinator.drain_inbox();

        let events = self.coordinator.backend_mut().advance(now);
        for event in events {
            self.coordinator.handle(event);
        }
    }

    /// Renders the attached banner, or nothing.
    pub fn view(&self) -> Element<'_, Message> {
        let surface = self.coordinator.backend().surface();
        match (surface.attached(), self.offset()) {
            (Some(banner), Some(offset)) if surface.is_visible() => banner::view(banner, offset),
            _ => Space::new().width(Length::Shrink).height(Length::Shrink).into(),
        }
    }

    /// Frame ticks while anything is on screen or pending, slow polling
    /// otherwise, plus window resizes.
    pub fn subscription(&self) -> Subscription<Message> {
        let interval = if self.needs_frames() {
            FRAME_INTERVAL
        } else {
            POLL_INTERVAL
        };
        let ticks = time::every(interval).map(Message::Tick);

        let resizes = event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::Resized(Size::new(size.width, size.height)))
            }
            event::Event::Window(window::Event::Opened { size, .. }) => {
                Some(Message::Resized(Size::new(size.width, size.height)))
            }
            _ => None,
        });

        Subscription::batch([ticks, resizes])
    }

    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.coordinator.has_overlay() || self.coordinator.backend().is_busy()
    }

    fn sync_clock(&mut self) {
        self.coordinator.backend_mut().sync(Instant::now());
    }

    /// Resets the gesture tracker when a different banner is attached.
    fn follow_attached(&mut self) {
        let current = self.attached().map(|banner| banner.notice.id());
        if current != self.tracked {
            self.tracker.reset();
            self.tracked = current;
        }
    }

    fn gesture(&mut self, gesture: Gesture) {
        let Some(id) = self.tracked else {
            return;
        };
        if !self.coordinator.backend().surface().accepts_gestures(id) {
            tracing::trace!(notice = %id, ?gesture, "gesture ignored, banner not interactive");
            return;
        }
        self.sync_clock();
        self.coordinator
            .handle(Event::DismissRequested(DismissRequest::new(id, gesture)));
    }
}
