// SPDX-License-Identifier: MPL-2.0
//! Window-backed banner surface and overlay host.
//!
//! In an iced window the "overlay" is a top layer stacked over the app
//! content. This type only keeps its bookkeeping: whether the layer exists
//! and is visible, the window bounds, and the single attached banner.
//! Rendering happens in [`super::banner`].

use crate::application::port::{OverlayHost, PresentationSurface};
use crate::domain::notice::{
    measure_banner, BannerMetrics, Notice, NoticeId, Rect, Size, TextMetrics,
};

/// Visibility of the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Released,
    Hidden,
    Visible,
}

/// The banner currently mounted in the overlay.
#[derive(Debug, Clone)]
pub struct AttachedBanner {
    pub notice: Notice,
    pub frame: Rect,
    pub gestures: bool,
}

/// Implements [`PresentationSurface`] and [`OverlayHost`] for one window.
#[derive(Debug, Clone)]
pub struct BannerSurface {
    metrics: BannerMetrics,
    text: TextMetrics,
    window: Size,
    overlay: OverlayState,
    attached: Option<AttachedBanner>,
}

impl BannerSurface {
    #[must_use]
    pub fn new(window: Size, metrics: BannerMetrics) -> Self {
        Self {
            metrics,
            text: TextMetrics::default(),
            window: window.sanitized(),
            overlay: OverlayState::Released,
            attached: None,
        }
    }

    #[must_use]
    pub fn with_text_metrics(mut self, text: TextMetrics) -> Self {
        self.text = text;
        self
    }

    /// Records the latest window size. The coordinator is told separately.
    pub fn set_window_size(&mut self, size: Size) {
        self.window = size.sanitized();
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window
    }

    #[must_use]
    pub fn metrics(&self) -> BannerMetrics {
        self.metrics
    }

    #[must_use]
    pub fn overlay_state(&self) -> OverlayState {
        self.overlay
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.overlay == OverlayState::Visible
    }

    #[must_use]
    pub fn attached(&self) -> Option<&AttachedBanner> {
        self.attached.as_ref()
    }

    /// True when `notice` is attached and accepts dismiss gestures.
    #[must_use]
    pub fn accepts_gestures(&self, notice: NoticeId) -> bool {
        self.attached
            .as_ref()
            .is_some_and(|banner| banner.gestures && banner.notice.id() == notice)
    }

    fn attached_mut(&mut self, notice: NoticeId) -> Option<&mut AttachedBanner> {
        self.attached
            .as_mut()
            .filter(|banner| banner.notice.id() == notice)
    }
}

impl PresentationSurface for BannerSurface {
    fn measure(&self, notice: &Notice, available: Size) -> Size {
        measure_banner(notice, available, &self.metrics, &self.text)
    }

    fn attach(&mut self, notice: &Notice, frame: Rect) {
        if let Some(previous) = &self.attached {
            tracing::warn!(
                previous = %previous.notice.id(),
                notice = %notice.id(),
                "attaching over a mounted banner"
            );
        }
        self.attached = Some(AttachedBanner {
            notice: notice.clone(),
            frame,
            gestures: false,
        });
    }

    fn resize(&mut self, notice: NoticeId, frame: Rect) {
        if let Some(banner) = self.attached_mut(notice) {
            banner.frame = frame;
        }
    }

    fn detach(&mut self, notice: NoticeId) {
        if self.attached_mut(notice).is_some() {
            self.attached = None;
        }
    }

    fn enable_gestures(&mut self, notice: NoticeId) {
        if let Some(banner) = self.attached_mut(notice) {
            banner.gestures = true;
        }
    }

    fn disable_gestures(&mut self, notice: NoticeId) {
        if let Some(banner) = self.attached_mut(notice) {
            banner.gestures = false;
        }
    }
}

impl OverlayHost for BannerSurface {
    fn create_overlay(&mut self) -> Size {
        if self.overlay == OverlayState::Released {
            self.overlay = OverlayState::Hidden;
        }
        self.window
    }

    fn show_overlay(&mut self) {
        self.overlay = OverlayState::Visible;
    }

    fn hide_overlay(&mut self) {
        if self.overlay == OverlayState::Visible {
            self.overlay = OverlayState::Hidden;
        }
    }

    fn release_overlay(&mut self) {
        self.overlay = OverlayState::Released;
        self.attached = None;
    }
}
