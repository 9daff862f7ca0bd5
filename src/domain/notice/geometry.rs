// SPDX-License-Identifier: MPL-2.0
//! Minimal 2D geometry in logical pixels.
//!
//! The y axis grows downwards; the top edge of the overlay is `y = 0`.

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the size with negative or non-finite components replaced by zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let side = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: side(self.width),
            height: side(self.height),
        }
    }

    /// True when either side is zero (after sanitizing).
    #[must_use]
    pub fn is_empty(self) -> bool {
        let s = self.sanitized();
        s.width <= 0.0 || s.height <= 0.0
    }
}

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Point::ORIGIN,
        size: Size::ZERO,
    };

    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` anchored at the origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ORIGIN,
            size,
        }
    }

    #[must_use]
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    #[must_use]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the same rectangle moved vertically by `dy`.
    #[must_use]
    pub fn offset_y(self, dy: f32) -> Self {
        Self {
            origin: Point::new(self.origin.x, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}
