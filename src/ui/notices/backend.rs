// SPDX-License-Identifier: MPL-2.0
//! The coordinator backend used inside an iced application.

use super::surface::BannerSurface;
use crate::application::coordinator::Event;
use crate::application::port::{
    Animator, OverlayHost, PresentationSurface, Scheduler, TimerId, Transition,
};
use crate::domain::notice::{Notice, NoticeId, Rect, Size};
use crate::infrastructure::{TickAnimator, TickScheduler};
use std::time::{Duration, Instant};

/// Frame-clock scheduler and animator plus the window surface.
#[derive(Debug, Clone)]
pub struct IcedBackend {
    scheduler: TickScheduler,
    animator: TickAnimator,
    surface: BannerSurface,
}

impl IcedBackend {
    #[must_use]
    pub fn new(surface: BannerSurface, now: Instant) -> Self {
        Self {
            scheduler: TickScheduler::new(now),
            animator: TickAnimator::new(now),
            surface,
        }
    }

    /// Brings both clocks up to `now` without completing anything.
    pub fn sync(&mut self, now: Instant) {
        self.scheduler.sync(now);
        self.animator.sync(now);
    }

    /// Advances to `now` and collects every completion, animations first.
    pub fn advance(&mut self, now: Instant) -> Vec<Event> {
        let mut events = self.animator.tick(now);
        events.extend(self.scheduler.tick(now));
        events
    }

    /// True while a timer or transition still needs frame ticks.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.animator.is_animating() || !self.scheduler.is_idle()
    }

    #[must_use]
    pub fn surface(&self) -> &BannerSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut BannerSurface {
        &mut self.surface
    }

    #[must_use]
    pub fn animator(&self) -> &TickAnimator {
        &self.animator
    }

    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }
}

impl Scheduler for IcedBackend {
    fn schedule(&mut self, delay: Duration, timer: TimerId) {
        self.scheduler.schedule(delay, timer);
    }

    fn cancel(&mut self, timer: TimerId) {
        self.scheduler.cancel(timer);
    }
}

impl Animator for IcedBackend {
    fn animate(&mut self, transition: Transition) {
        self.animator.animate(transition);
    }
}

impl PresentationSurface for IcedBackend {
    fn measure(&self, notice: &Notice, available: Size) -> Size {
        self.surface.measure(notice, available)
    }

    fn attach(&mut self, notice: &Notice, frame: Rect) {
        self.surface.attach(notice, frame);
    }

    fn resize(&mut self, notice: NoticeId, frame: Rect) {
        self.surface.resize(notice, frame);
    }

    fn detach(&mut self, notice: NoticeId) {
        self.surface.detach(notice);
        self.animator.forget(notice);
    }

    fn enable_gestures(&mut self, notice: NoticeId) {
        self.surface.enable_gestures(notice);
    }

    fn disable_gestures(&mut self, notice: NoticeId) {
        self.surface.disable_gestures(notice);
    }
}

impl OverlayHost for IcedBackend {
    fn create_overlay(&mut self) -> Size {
        self.surface.create_overlay()
    }

    fn show_overlay(&mut self) {
        self.surface.show_overlay();
    }

    fn hide_overlay(&mut self) {
        self.surface.hide_overlay();
    }

    fn release_overlay(&mut self) {
        self.surface.release_overlay();
    }
}
