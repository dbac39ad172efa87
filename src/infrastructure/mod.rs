// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like
//! `reqwest`, the `image` decoder and the Tokio runtime.
//!
//! # Available Adapters
//!
//! - [`image_loader`]: HTTP and filesystem image loading (implements [`ImageLoader`])
//! - [`idle`]: Host-driven idle notification (implements [`IdleHook`])
//!
//! [`ImageLoader`]: crate::application::port::ImageLoader
//! [`IdleHook`]: crate::application::port::IdleHook

pub mod idle;
pub mod image_loader;

pub use idle::IdleSignal;
pub use image_loader::SiteImageLoader;
