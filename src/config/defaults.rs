// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Navigation**: Swipe threshold, drag resistance and settle timing
//! - **Preload**: Idle scheduling of the site-wide image warm-up

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Default minimum swipe distance (in pixels) that commits a panel change.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 80.0;

/// Minimum allowed swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 1.0;

/// Maximum allowed swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 1000.0;

/// Default damping applied to the finger delta while dragging.
pub const DEFAULT_DRAG_RESISTANCE: f32 = 0.35;

/// Smallest accepted drag resistance. Zero would freeze the panel in place.
pub const MIN_DRAG_RESISTANCE: f32 = 0.01;

/// Largest accepted drag resistance (panel follows the finger 1:1).
pub const MAX_DRAG_RESISTANCE: f32 = 1.0;

/// Default duration of the commit and snap-back animations (in milliseconds).
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 300;

/// Maximum settle duration (in milliseconds).
pub const MAX_SETTLE_DURATION_MS: u64 = 5000;

/// Viewport extent used for the commit animation until the view reports one.
pub const DEFAULT_VIEWPORT_EXTENT_PX: f32 = 1024.0;

// ==========================================================================
// Preload Defaults
// ==========================================================================

/// Upper bound on how long the warm-up waits for the host to go idle.
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 1500;

/// Delay before warming when no idle hook is available.
pub const DEFAULT_FALLBACK_DELAY_MS: u64 = 0;
