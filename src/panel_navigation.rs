// SPDX-License-Identifier: MPL-2.0
//! Gesture-driven panel navigation.
//!
//! [`GestureNavigator`] turns a pointer/touch gesture into at most one panel
//! change, with live drag feedback while the finger is down and a timed
//! settle animation afterwards.
//!
//! # State Machine
//!
//! - `Idle -> Dragging` on gesture start, unless a transition holds the lock.
//! - `Dragging -> Dragging` on every move; the offset is the finger delta
//!   damped by the drag resistance.
//! - `Dragging -> Transitioning` on release when the swipe distance meets the
//!   threshold and the neighbouring panel exists. The lock is held until the
//!   commit settle finishes, then the index moves by exactly one.
//! - `Dragging -> Idle` on release otherwise: the offset snaps back to zero.
//!   A snap-back animates but holds no lock; a new gesture may interrupt it.
//!
//! # Invariants
//!
//! 1. The panel index stays in `[0, total_panels - 1]` and changes by at most
//!    one per completed gesture.
//! 2. While the lock is held, gesture starts and releases are ignored without
//!    touching any state.
//! 3. Only settle completion or [`teardown`](GestureNavigator::teardown)
//!    releases the lock.
//!
//! The navigator never suspends: every call runs synchronously. Time enters
//! only through the `now` arguments and the [`settle`](GestureNavigator::settle)
//! timer.

use crate::config::{NavigationConfig, SwipeAxis, DEFAULT_VIEWPORT_EXTENT_PX};
use crate::domain::ui::{DragResistance, SettleDuration, SwipeThreshold};
use crate::ui::state::{DragState, Settle, SettleKind};
use std::time::Instant;

/// Tuning values for gesture navigation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigatorSettings {
    pub swipe_threshold: SwipeThreshold,
    pub drag_resistance: DragResistance,
    pub settle_duration: SettleDuration,
    pub axis: SwipeAxis,
}

impl From<&NavigationConfig> for NavigatorSettings {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold(),
            drag_resistance: config.drag_resistance(),
            settle_duration: config.settle_duration(),
            axis: config.axis(),
        }
    }
}

/// One raw pointer or touch position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub x: f32,
    pub y: f32,
}

impl GestureSample {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along the navigation axis.
    #[must_use]
    pub fn along(self, axis: SwipeAxis) -> f32 {
        match axis {
            SwipeAxis::Horizontal => self.x,
            SwipeAxis::Vertical => self.y,
        }
    }
}

/// Coarse state reported to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging,
    Transitioning,
}

/// Swipe direction relative to the panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Decision taken when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The event was dropped (no drag active, or a transition holds the lock).
    Ignored,
    /// A transition to `to` started; the lock is held until it settles.
    Committing { from: usize, to: usize },
    /// The panel is animating back to rest.
    SnappingBack,
}

/// Completion reported when a settle animation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Committed { index: usize },
    SnappedBack,
}

/// What the view needs to render a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorView {
    pub state: GestureState,
    pub index: usize,
    pub offset: f32,
}

/// Converts gestures into single, lock-guarded panel transitions.
#[derive(Debug, Clone)]
pub struct GestureNavigator {
    settings: NavigatorSettings,
    total_panels: usize,
    index: usize,
    viewport_extent: f32,
    drag: DragState,
    settle: Option<Settle>,
    /// Held for the whole commit settle.
    transition_lock: bool,
    offset: f32,
}

impl GestureNavigator {
    /// Creates a navigator over `total_panels` panels, starting at the first.
    #[must_use]
    pub fn new(settings: NavigatorSettings, total_panels: usize) -> Self {
        Self::starting_at(settings, total_panels, 0)
    }

    /// Creates a navigator starting at `index`, clamped to the last panel.
    #[must_use]
    pub fn starting_at(settings: NavigatorSettings, total_panels: usize, index: usize) -> Self {
        Self {
            settings,
            total_panels,
            index: index.min(total_panels.saturating_sub(1)),
            viewport_extent: DEFAULT_VIEWPORT_EXTENT_PX,
            drag: DragState::default(),
            settle: None,
            transition_lock: false,
            offset: 0.0,
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> GestureState {
        if self.transition_lock {
            GestureState::Transitioning
        } else if self.drag.is_active {
            GestureState::Dragging
        } else {
            GestureState::Idle
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total_panels(&self) -> usize {
        self.total_panels
    }

    /// Live panel offset for rendering.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.transition_lock
    }

    /// True while a commit or snap-back animation runs.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Completion instant of the running settle, if any.
    #[must_use]
    pub fn settle_deadline(&self) -> Option<Instant> {
        self.settle.as_ref().map(Settle::deadline)
    }

    #[must_use]
    pub fn settings(&self) -> &NavigatorSettings {
        &self.settings
    }

    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    #[must_use]
    pub fn view(&self) -> NavigatorView {
        NavigatorView {
            state: self.state(),
            index: self.index,
            offset: self.offset,
        }
    }

    /// Index of the neighbour in `direction`, if it exists.
    #[must_use]
    pub fn adjacent(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Forward => {
                let next = self.index + 1;
                (next < self.total_panels).then_some(next)
            }
            Direction::Backward => self.index.checked_sub(1),
        }
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    /// Sets the full-viewport extent along the navigation axis.
    ///
    /// Non-positive or non-finite values are ignored.
    pub fn set_viewport_extent(&mut self, extent: f32) {
        if extent.is_finite() && extent > 0.0 {
            self.viewport_extent = extent;
        }
    }

    /// Handles a gesture start. Returns `false` if it was ignored.
    ///
    /// A start while the lock is held leaves every field untouched. A start
    /// during a snap-back cancels the animation.
    pub fn begin(&mut self, sample: GestureSample) -> bool {
        if self.transition_lock {
            tracing::trace!(index = self.index, "gesture start ignored: transition in progress");
            return false;
        }
        if self.drag.is_active {
            tracing::trace!("gesture start ignored: drag already active");
            return false;
        }

        if self.settle.take().is_some() {
            tracing::trace!("snap-back interrupted by new gesture");
        }
        let position = sample.along(self.settings.axis);
        self.drag.start(position);
        self.offset = 0.0;
        tracing::debug!(index = self.index, position, "drag started");
        true
    }

    /// Handles a move sample, returning the new offset while dragging.
    pub fn update(&mut self, sample: GestureSample) -> Option<f32> {
        let position = sample.along(self.settings.axis);
        let offset = self.drag.follow(position, self.settings.drag_resistance)?;
        self.offset = offset;
        Some(offset)
    }

    /// Handles a gesture end and decides between commit and snap-back.
    pub fn end(&mut self, sample: GestureSample, now: Instant) -> GestureOutcome {
        if self.transition_lock {
            tracing::trace!("gesture end ignored: transition in progress");
            return GestureOutcome::Ignored;
        }
        let Some(distance) = self.drag.distance_to(sample.along(self.settings.axis)) else {
            return GestureOutcome::Ignored;
        };
        self.drag.stop();

        let direction = if distance > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let target = self
            .settings
            .swipe_threshold
            .is_met_by(distance)
            .then(|| self.adjacent(direction))
            .flatten();

        match target {
            Some(to) => {
                let from = self.index;
                let destination = match direction {
                    Direction::Forward => -self.viewport_extent,
                    Direction::Backward => self.viewport_extent,
                };
                self.transition_lock = true;
                self.start_settle(SettleKind::Commit { target: to }, destination, now);
                tracing::debug!(from, to, distance, "panel transition started");
                GestureOutcome::Committing { from, to }
            }
            None => {
                self.start_settle(SettleKind::SnapBack, 0.0, now);
                tracing::debug!(index = self.index, distance, "snapping back");
                GestureOutcome::SnappingBack
            }
        }
    }

    /// Handles a platform gesture cancel: snaps back without a decision.
    pub fn cancel(&mut self, now: Instant) -> GestureOutcome {
        if self.transition_lock || !self.drag.is_active {
            return GestureOutcome::Ignored;
        }
        self.drag.stop();
        self.start_settle(SettleKind::SnapBack, 0.0, now);
        GestureOutcome::SnappingBack
    }

    fn start_settle(&mut self, kind: SettleKind, to: f32, now: Instant) {
        self.settle = Some(Settle::new(
            kind,
            self.offset,
            to,
            now,
            self.settings.settle_duration.as_duration(),
        ));
    }

    // ---------------------------------------------------------------------
    // Settling
    // ---------------------------------------------------------------------

    /// Advances the settle animation to `now`.
    ///
    /// Returns the completion once the settle duration has elapsed; the
    /// commit moves the index, resets the offset and releases the lock.
    pub fn tick(&mut self, now: Instant) -> Option<Settled> {
        let settle = self.settle.as_ref()?;
        if !settle.is_finished(now) {
            self.offset = settle.offset_at(now);
            return None;
        }

        let kind = settle.kind();
        self.settle = None;
        self.offset = 0.0;
        match kind {
            SettleKind::Commit { target } => {
                self.index = target;
                self.transition_lock = false;
                tracing::debug!(index = target, "panel transition settled");
                Some(Settled::Committed { index: target })
            }
            SettleKind::SnapBack => Some(Settled::SnappedBack),
        }
    }

    /// Waits for the running settle to finish and completes it.
    ///
    /// Returns `None` immediately when nothing is settling. Dropping the
    /// future abandons the wait; call [`teardown`](Self::teardown) to release
    /// the lock as well.
    pub async fn settle(&mut self) -> Option<Settled> {
        let settle = self.settle.as_ref()?;
        let deadline = settle.deadline();
        tokio::time::sleep(settle.remaining(Instant::now())).await;
        self.tick(deadline)
    }

    /// Aborts any pending settle and drag, and releases the lock.
    ///
    /// Used when the owning view unmounts. A commit that has not settled is
    /// discarded, so the index does not change.
    pub fn teardown(&mut self) {
        if self.transition_lock {
            tracing::debug!(index = self.index, "transition aborted by teardown");
        }
        self.settle = None;
        self.transition_lock = false;
        self.drag.stop();
        self.offset = 0.0;
    }
}
