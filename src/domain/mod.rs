// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no I/O.
//!
//! # Modules
//!
//! - [`media`]: Cache keys and decoded images ([`CacheKey`](media::CacheKey),
//!   [`DecodedImage`](media::DecodedImage))
//! - [`ui`]: Gesture tuning values ([`SwipeThreshold`](ui::SwipeThreshold),
//!   [`DragResistance`](ui::DragResistance), [`SettleDuration`](ui::SettleDuration))

pub mod media;
pub mod ui;
