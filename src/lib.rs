// SPDX-License-Identifier: MPL-2.0
//! `folio` is the interaction layer of a static portfolio site.
//!
//! It provides a single-flight image preload cache that warms every site
//! asset exactly once, and a gesture-driven panel navigator that turns
//! pointer or touch input into one lock-guarded transition per swipe.

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod panel_navigation;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
