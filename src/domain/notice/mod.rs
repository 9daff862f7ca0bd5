// SPDX-License-Identifier: MPL-2.0
//! Notice value objects.
//!
//! Everything a caller needs to describe a banner notice, plus the pure
//! geometry used to size and lay it out. Nothing here knows about timers,
//! animation or the iced runtime.
//!
//! - [`category`]: [`NoticeCategory`] and its fixed accent colors
//! - [`newtypes`]: [`NoticeDuration`] and [`EdgeInsets`]
//! - [`geometry`]: [`Size`], [`Point`], [`Rect`]
//! - [`record`]: the [`Notice`] record itself
//! - [`layout`]: banner measurement and content frames

pub mod category;
pub mod geometry;
pub mod layout;
pub mod newtypes;
pub mod record;

pub use category::{Accent, NoticeCategory, Rgb};
pub use geometry::{Point, Rect, Size};
pub use layout::{layout_banner, measure_banner, BannerLayout, BannerMetrics, TextMetrics};
pub use newtypes::{duration_bounds, EdgeInsets, NoticeDuration};
pub use record::{ImageSource, Notice, NoticeId, NoticeImage};
