// SPDX-License-Identifier: MPL-2.0
//! Notice categories and accent colors.

/// An opaque RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Creates a color, clamping each component to `0.0..=1.0`.
    ///
    /// NaN components become `0.0`.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        let channel = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }
}

/// Semantic kind of a notice. Each one maps to a fixed accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeCategory {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeCategory {
    /// All categories in declaration order.
    pub const ALL: [NoticeCategory; 4] = [
        NoticeCategory::Success,
        NoticeCategory::Info,
        NoticeCategory::Warning,
        NoticeCategory::Error,
    ];

    /// Returns the accent color for this category.
    #[must_use]
    pub fn color(self) -> Rgb {
        match self {
            NoticeCategory::Success => Rgb {
                r: 0.46,
                g: 0.71,
                b: 0.29,
            },
            NoticeCategory::Info => Rgb {
                r: 0.26,
                g: 0.66,
                b: 0.88,
            },
            NoticeCategory::Warning => Rgb {
                r: 0.95,
                g: 0.62,
                b: 0.13,
            },
            NoticeCategory::Error => Rgb {
                r: 0.88,
                g: 0.26,
                b: 0.26,
            },
        }
    }

    /// Short lowercase label, used in logs and the demo UI.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NoticeCategory::Success => "success",
            NoticeCategory::Info => "info",
            NoticeCategory::Warning => "warning",
            NoticeCategory::Error => "error",
        }
    }
}

/// Background accent of a notice: a category default or a caller override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accent {
    Category(NoticeCategory),
    Custom(Rgb),
}

impl Accent {
    /// Resolves the accent to a concrete color.
    #[must_use]
    pub fn color(self) -> Rgb {
        match self {
            Accent::Category(category) => category.color(),
            Accent::Custom(color) => color,
        }
    }

    /// Returns the category, if the accent was not overridden.
    #[must_use]
    pub fn category(self) -> Option<NoticeCategory> {
        match self {
            Accent::Category(category) => Some(category),
            Accent::Custom(_) => None,
        }
    }
}

impl Default for Accent {
    fn default() -> Self {
        Accent::Category(NoticeCategory::Error)
    }
}

impl From<NoticeCategory> for Accent {
    fn from(category: NoticeCategory) -> Self {
        Accent::Category(category)
    }
}

impl From<Rgb> for Accent {
    fn from(color: Rgb) -> Self {
        Accent::Custom(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_colors_are_distinct() {
        for (i, a) in NoticeCategory::ALL.iter().enumerate() {
            for b in &NoticeCategory::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a:?} and {b:?} share a color");
            }
        }
    }

    #[test]
    fn info_color_matches_table() {
        let info = NoticeCategory::Info.color();
        assert_eq!(info, Rgb { r: 0.26, g: 0.66, b: 0.88 });
    }

    #[test]
    fn custom_accent_overrides_category() {
        let custom = Rgb::new(0.1, 0.2, 0.3);
        let accent = Accent::from(custom);
        assert_eq!(accent.color(), custom);
        assert_eq!(accent.category(), None);
    }

    #[test]
    fn default_accent_is_error() {
        assert_eq!(Accent::default(), Accent::Category(NoticeCategory::Error));
    }

    #[test]
    fn rgb_new_clamps_and_rejects_nan() {
        let color = Rgb::new(1.5, -0.2, f32::NAN);
        assert_eq!(color, Rgb { r: 1.0, g: 0.0, b: 0.0 });
    }

    #[test]
    fn rgb8_maps_extremes() {
        assert_eq!(Rgb::from_rgb8(255, 0, 255), Rgb { r: 1.0, g: 0.0, b: 1.0 });
    }
}
