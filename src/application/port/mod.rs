// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the preload cache and warm-up logic
//! can be exercised without a network or filesystem.
//!
//! # Available Ports
//!
//! - [`image_loader`]: Issuing image requests
//! - [`idle`]: Host idle notification
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared across tasks
//! - Async methods return `BoxFuture<'static, _>` so callers can store and share them

pub mod idle;
pub mod image_loader;

pub use idle::IdleHook;
pub use image_loader::{ImageLoader, LoadError, LoadOutcome};
