// SPDX-License-Identifier: MPL-2.0
//! Banner measurement and content layout.
//!
//! A banner always spans the full available width. Its height is driven by
//! its content (image and wrapped message) but never drops below the minimum
//! banner height derived from [`BannerMetrics`], and never exceeds the
//! available height.

use super::geometry::{Point, Rect, Size};
use super::record::Notice;

/// Extra height added below the status bar on regular layouts.
pub const REGULAR_BAR_HEIGHT: f32 = 44.0;

/// Extra height added below the status bar on compact-landscape phones.
pub const COMPACT_BAR_HEIGHT: f32 = 32.0;

/// Device metrics that drive the minimum banner height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BannerMetrics {
    /// Height of the system status bar, if any.
    pub status_bar_height: f32,
    /// Small phone held in landscape: use the shorter bar.
    pub compact_landscape: bool,
}

impl BannerMetrics {
    #[must_use]
    pub fn new(status_bar_height: f32, compact_landscape: bool) -> Self {
        Self {
            status_bar_height,
            compact_landscape,
        }
    }

    /// Smallest height a banner may have.
    #[must_use]
    pub fn min_banner_height(&self) -> f32 {
        let status_bar = if self.status_bar_height.is_finite() {
            self.status_bar_height.max(0.0)
        } else {
            0.0
        };
        let bar = if self.compact_landscape {
            COMPACT_BAR_HEIGHT
        } else {
            REGULAR_BAR_HEIGHT
        };
        status_bar + bar
    }
}

// =============================================================================
// Text Measurement
// =============================================================================

/// Approximate text metrics used to size a wrapped message.
///
/// Glyphs are assumed to share one average advance; words wrap greedily and
/// explicit newlines always start a new line. This is deliberately cheap: it
/// runs on every measurement pass, including on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Font size in logical pixels.
    pub font_size: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    /// Average glyph advance as a multiple of the font size.
    pub glyph_width: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            line_height: 1.3,
            glyph_width: 0.5,
        }
    }
}

impl TextMetrics {
    fn advance(&self) -> f32 {
        (self.font_size * self.glyph_width).max(f32::EPSILON)
    }

    fn line_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Measures `text` wrapped to `max_width`.
    ///
    /// Returns [`Size::ZERO`] when nothing can be laid out (empty text or no
    /// horizontal room).
    #[must_use]
    pub fn measure(&self, text: &str, max_width: f32) -> Size {
        if text.is_empty() || !max_width.is_finite() || max_width <= 0.0 {
            return Size::ZERO;
        }

        let advance = self.advance();
        // Truncation is intended: a partial glyph does not fit.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let per_line = ((max_width / advance).floor() as usize).max(1);

        let mut lines = 0usize;
        let mut widest = 0usize;
        for paragraph in text.split('\n') {
            let (count, width) = wrap_paragraph(paragraph, per_line);
            lines += count;
            widest = widest.max(width);
        }

        #[allow(clippy::cast_precision_loss)]
        let width = (widest as f32 * advance).min(max_width);
        #[allow(clippy::cast_precision_loss)]
        let height = lines as f32 * self.line_px();
        Size::new(width, height)
    }
}

/// Greedy word wrap. Returns (line count, widest line in glyphs).
fn wrap_paragraph(paragraph: &str, per_line: usize) -> (usize, usize) {
    let mut lines = 1;
    let mut current = 0usize;
    let mut widest = 0usize;

    for word in paragraph.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            current = len;
        } else if current + 1 + len <= per_line {
            current += 1 + len;
        } else {
            widest = widest.max(current.min(per_line));
            lines += 1;
            current = len;
        }
        // Words longer than a line are hard-broken.
        while current > per_line {
            widest = per_line;
            lines += 1;
            current -= per_line;
        }
    }

    (lines, widest.max(current))
}

// =============================================================================
// Banner Measurement
// =============================================================================

fn image_fit(notice: &Notice) -> Size {
    notice.image().map_or(Size::ZERO, |image| {
        let insets = notice.image_insets();
        Size::new(
            insets.horizontal() + image.size().width,
            insets.vertical() + image.size().height,
        )
    })
}

/// Computes the size a banner needs inside `available`.
///
/// The width is always the available width. A zero or invalid width
/// degrades to the minimum banner height instead of failing.
#[must_use]
pub fn measure_banner(
    notice: &Notice,
    available: Size,
    metrics: &BannerMetrics,
    text: &TextMetrics,
) -> Size {
    let available = available.sanitized();
    let min_height = metrics.min_banner_height();
    let cap = if available.height > 0.0 {
        available.height
    } else {
        f32::INFINITY
    };

    if available.width <= 0.0 {
        return Size::new(0.0, min_height.min(cap));
    }

    let image = image_fit(notice);
    let text_insets = notice.text_insets();
    let message = notice.message().map_or(Size::ZERO, |message| {
        let max_width = available.width - image.width - text_insets.horizontal();
        let fit = text.measure(message, max_width);
        Size::new(
            fit.width + text_insets.horizontal(),
            fit.height + text_insets.vertical(),
        )
    });

    let content = image.height.max(message.height);
    Size::new(available.width, content.max(min_height).min(cap))
}

/// Frames of the banner content relative to the banner's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BannerLayout {
    pub image: Option<Rect>,
    pub text: Option<Rect>,
}

/// Positions the image and message inside a banner of `bounds`.
///
/// The image sits at the leading edge with its intrinsic width and the full
/// inner height; the message fills the remaining width to its right.
#[must_use]
pub fn layout_banner(notice: &Notice, bounds: Size) -> BannerLayout {
    let bounds = bounds.sanitized();
    let image_insets = notice.image_insets();
    let text_insets = notice.text_insets();

    let image = notice.image().map(|image| {
        Rect::new(
            Point::new(image_insets.left, image_insets.top),
            Size::new(
                image.size().width,
                (bounds.height - image_insets.vertical()).max(0.0),
            ),
        )
    });

    let text = notice.message().map(|_| {
        let image_right = image.map_or(0.0, |rect| rect.max_x());
        let origin = Point::new(
            image_right + image_insets.right + text_insets.left,
            text_insets.top,
        );
        Rect::new(
            origin,
            Size::new(
                (bounds.width - origin.x - text_insets.right).max(0.0),
                (bounds.height - text_insets.vertical()).max(0.0),
            ),
        )
    });

    BannerLayout { image, text }
}
