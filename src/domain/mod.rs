// SPDX-License-Identifier: MPL-2.0
//! Domain layer - notice value objects with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and layout rules.
//! It depends on nothing but `std` so it can be tested in isolation.
//!
//! # Modules
//!
//! - [`notice`]: Notice types ([`Notice`](notice::Notice),
//!   [`NoticeCategory`](notice::NoticeCategory), [`NoticeDuration`](notice::NoticeDuration))
//!   and banner geometry ([`measure_banner`](notice::measure_banner))

pub mod notice;
