// SPDX-License-Identifier: MPL-2.0
//! The notice record.
//!
//! A [`Notice`] is built by a caller, handed to the coordinator queue and
//! never mutated afterwards: every builder method consumes and returns the
//! value, and there are no `&mut self` setters.

use super::category::{Accent, NoticeCategory, Rgb};
use super::geometry::Size;
use super::newtypes::{EdgeInsets, NoticeDuration};
use std::path::PathBuf;
use std::sync::Arc;

/// Unique identifier for a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

impl NoticeId {
    /// Allocates a new process-unique notice ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NoticeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoticeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the pixels of a notice image come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// An image file on disk.
    Path(PathBuf),
    /// Encoded image bytes (PNG, JPEG, ...), shared between clones.
    Bytes(Arc<[u8]>),
}

/// An image shown at the leading edge of a banner.
///
/// The intrinsic size is supplied by the caller so layout never has to
/// decode the image.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeImage {
    source: ImageSource,
    size: Size,
}

impl NoticeImage {
    #[must_use]
    pub fn new(source: ImageSource, size: Size) -> Self {
        Self {
            source,
            size: size.sanitized(),
        }
    }

    /// Convenience constructor for an image file.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>, size: Size) -> Self {
        Self::new(ImageSource::Path(path.into()), size)
    }

    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }
}

/// One banner notice waiting to be, or being, displayed.
#[derive(Debug, Clone)]
pub struct Notice {
    id: NoticeId,
    duration: NoticeDuration,
    accent: Accent,
    message: Option<String>,
    image: Option<NoticeImage>,
    text_insets: EdgeInsets,
    image_insets: EdgeInsets,
}

impl Notice {
    /// Creates an empty notice with the default duration and the error accent.
    pub fn new() -> Self {
        Self {
            id: NoticeId::new(),
            duration: NoticeDuration::default(),
            accent: Accent::default(),
            message: None,
            image: None,
            text_insets: EdgeInsets::text_default(),
            image_insets: EdgeInsets::image_default(),
        }
    }

    /// Builds a notice from primitive fields.
    ///
    /// `duration_secs` is normalized by [`NoticeDuration::from_secs_f64`].
    pub fn from_parts(
        duration_secs: f64,
        category: NoticeCategory,
        message: impl Into<String>,
        image: Option<NoticeImage>,
    ) -> Self {
        let notice = Self::new()
            .with_duration(NoticeDuration::from_secs_f64(duration_secs))
            .with_category(category)
            .with_message(message);
        match image {
            Some(image) => notice.with_image(image),
            None => notice,
        }
    }

    /// Same notice under a newly allocated id.
    #[must_use]
    pub(crate) fn with_fresh_id(mut self) -> Self {
        self.id = NoticeId::new();
        self
    }

    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new()
            .with_category(NoticeCategory::Success)
            .with_message(message)
    }

    /// Creates an info notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new()
            .with_category(NoticeCategory::Info)
            .with_message(message)
    }

    /// Creates a warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new()
            .with_category(NoticeCategory::Warning)
            .with_message(message)
    }

    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new()
            .with_category(NoticeCategory::Error)
            .with_message(message)
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<NoticeDuration>) -> Self {
        self.duration = duration.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: NoticeCategory) -> Self {
        self.accent = Accent::Category(category);
        self
    }

    /// Overrides the category color with an arbitrary one.
    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.accent = Accent::Custom(color);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: NoticeImage) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_text_insets(mut self, insets: EdgeInsets) -> Self {
        self.text_insets = insets;
        self
    }

    #[must_use]
    pub fn with_image_insets(mut self, insets: EdgeInsets) -> Self {
        self.image_insets = insets;
        self
    }

    #[must_use]
    pub fn id(&self) -> NoticeId {
        self.id
    }

    #[must_use]
    pub fn duration(&self) -> NoticeDuration {
        self.duration
    }

    #[must_use]
    pub fn accent(&self) -> Accent {
        self.accent
    }

    /// Resolved background color.
    #[must_use]
    pub fn color(&self) -> Rgb {
        self.accent.color()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn image(&self) -> Option<&NoticeImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn text_insets(&self) -> EdgeInsets {
        self.text_insets
    }

    #[must_use]
    pub fn image_insets(&self) -> EdgeInsets {
        self.image_insets
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notice::newtypes::duration_bounds;

    #[test]
    fn notice_ids_are_unique() {
        let a = Notice::new();
        let b = Notice::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn clone_keeps_identity() {
        let a = Notice::info("hello");
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn fresh_id_keeps_content() {
        let a = Notice::warning("again");
        let b = a.clone().with_fresh_id();
        assert_ne!(b.id(), a.id());
        assert_eq!(b.message(), a.message());
        assert_eq!(b.color(), a.color());
    }

    #[test]
    fn new_notice_uses_defaults() {
        let notice = Notice::new();
        assert_eq!(notice.duration(), NoticeDuration::default());
        assert_eq!(notice.color(), NoticeCategory::Error.color());
        assert!(notice.message().is_none());
        assert!(notice.image().is_none());
        assert_eq!(notice.text_insets(), EdgeInsets::text_default());
        assert_eq!(notice.image_insets(), EdgeInsets::image_default());
    }

    #[test]
    fn from_parts_sets_every_field() {
        let image = NoticeImage::from_path("icons/info.png", Size::new(24.0, 24.0));
        let notice = Notice::from_parts(2.0, NoticeCategory::Info, "hello", Some(image.clone()));

        assert_eq!(notice.duration().as_secs_f64(), 2.0);
        assert_eq!(notice.accent(), Accent::Category(NoticeCategory::Info));
        assert_eq!(notice.message(), Some("hello"));
        assert_eq!(notice.image(), Some(&image));
    }

    #[test]
    fn from_parts_clamps_non_positive_duration() {
        let notice = Notice::from_parts(0.0, NoticeCategory::Warning, "x", None);
        assert_eq!(notice.duration().as_secs_f64(), duration_bounds::MIN_SECS);
    }

    #[test]
    fn custom_color_replaces_category() {
        let color = Rgb::new(0.2, 0.2, 0.2);
        let notice = Notice::success("saved").with_color(color);
        assert_eq!(notice.color(), color);
        assert_eq!(notice.accent().category(), None);
    }

    #[test]
    fn insets_are_independently_overridable() {
        let text = EdgeInsets::new(4.0, 8.0, 4.0, 8.0);
        let notice = Notice::info("x").with_text_insets(text);
        assert_eq!(notice.text_insets(), text);
        assert_eq!(notice.image_insets(), EdgeInsets::image_default());
    }

    #[test]
    fn constructors_set_category() {
        assert_eq!(Notice::success("").accent().category(), Some(NoticeCategory::Success));
        assert_eq!(Notice::info("").accent().category(), Some(NoticeCategory::Info));
        assert_eq!(Notice::warning("").accent().category(), Some(NoticeCategory::Warning));
        assert_eq!(Notice::error("").accent().category(), Some(NoticeCategory::Error));
    }
}
