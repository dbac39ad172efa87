// SPDX-License-Identifier: MPL-2.0
//! Image resource readiness.
//!
//! - [`preload`]: single-flight preload cache
//! - [`warm`]: background warm-up of every site asset

pub mod preload;
pub mod warm;

pub use preload::{AssetPreloadCache, Preload, PreloadStats};
pub use warm::{schedule_when_idle, warm_site_assets, WarmSchedule};
