// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for gesture tuning values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_DRAG_RESISTANCE, DEFAULT_SETTLE_DURATION_MS, DEFAULT_SWIPE_THRESHOLD_PX,
    MAX_DRAG_RESISTANCE, MAX_SETTLE_DURATION_MS, MAX_SWIPE_THRESHOLD_PX, MIN_DRAG_RESISTANCE,
    MIN_SWIPE_THRESHOLD_PX,
};
use std::time::Duration;

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum absolute swipe distance in pixels that commits a panel change.
///
/// Non-finite input falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        Self(px.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn px(self) -> f32 {
        self.0
    }

    /// Returns true when `distance` is long enough to commit, in either direction.
    #[must_use]
    pub fn is_met_by(self, distance: f32) -> bool {
        distance.abs() >= self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

// =============================================================================
// DragResistance
// =============================================================================

/// Damping factor in `(0, 1]` applied to the finger delta while dragging.
///
/// # Example
///
/// ```
/// use folio::domain::ui::DragResistance;
///
/// let resistance = DragResistance::new(0.5);
/// assert_eq!(resistance.apply(100.0), 50.0);
///
/// // Values outside range are clamped
/// assert_eq!(DragResistance::new(3.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragResistance(f32);

impl DragResistance {
    /// Creates a new resistance, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::default();
        }
        Self(factor.clamp(MIN_DRAG_RESISTANCE, MAX_DRAG_RESISTANCE))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Damps a raw finger delta.
    #[must_use]
    pub fn apply(self, delta: f32) -> f32 {
        delta * self.0
    }
}

impl Default for DragResistance {
    fn default() -> Self {
        Self(DEFAULT_DRAG_RESISTANCE)
    }
}

// =============================================================================
// SettleDuration
// =============================================================================

/// Duration of the commit and snap-back animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleDuration(u64);

impl SettleDuration {
    /// Creates a new settle duration in milliseconds, clamped to the maximum.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.min(MAX_SETTLE_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when settling completes on the first tick.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for SettleDuration {
    fn default() -> Self {
        Self(DEFAULT_SETTLE_DURATION_MS)
    }
}
