// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks one pointer drag along the navigation axis: where it started and
//! how far the panel has been pulled.

use crate::domain::ui::DragResistance;

/// Manages the active drag of a panel gesture
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_active: bool,

    /// Axis position where the drag started
    pub start_position: Option<f32>,

    /// Damped offset of the panel from its resting position
    pub current_offset: f32,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: f32) {
        self.is_active = true;
        self.start_position = Some(position);
        self.current_offset = 0.0;
    }

    /// Stops the drag operation, returning the final offset
    pub fn stop(&mut self) -> f32 {
        let offset = self.current_offset;
        self.is_active = false;
        self.start_position = None;
        self.current_offset = 0.0;
        offset
    }

    /// Recomputes the offset for a new pointer position.
    ///
    /// Returns `None` when no drag is active.
    pub fn follow(&mut self, position: f32, resistance: DragResistance) -> Option<f32> {
        if !self.is_active {
            return None;
        }
        let start = self.start_position?;
        self.current_offset = resistance.apply(position - start);
        Some(self.current_offset)
    }

    /// Swipe distance to `end_position`. Positive means forward (towards the
    /// next panel), i.e. the pointer moved towards smaller coordinates.
    #[must_use]
    pub fn distance_to(&self, end_position: f32) -> Option<f32> {
        if !self.is_active {
            return None;
        }
        Some(self.start_position? - end_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_active() {
        let state = DragState::default();
        assert!(!state.is_active);
        assert!(state.start_position.is_none());
        assert_eq!(state.current_offset, 0.0);
    }

    #[test]
    fn start_drag_sets_state() {
        let mut state = DragState::default();
        state.current_offset = 12.0;
        state.start(100.0);

        assert!(state.is_active);
        assert_eq!(state.start_position, Some(100.0));
        assert_eq!(state.current_offset, 0.0);
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(100.0);
        state.follow(60.0, DragResistance::new(1.0));

        assert_eq!(state.stop(), -40.0);
        assert!(!state.is_active);
        assert!(state.start_position.is_none());
        assert_eq!(state.current_offset, 0.0);
    }

    #[test]
    fn follow_returns_none_when_not_dragging() {
        let mut state = DragState::default();
        assert!(state.follow(100.0, DragResistance::default()).is_none());
    }

    #[test]
    fn follow_applies_resistance() {
        let mut state = DragState::default();
        state.start(200.0);

        // Finger moved 100px towards smaller x, panel lags at half speed
        let offset = state.follow(100.0, DragResistance::new(0.5));
        assert_eq!(offset, Some(-50.0));
        assert_eq!(state.current_offset, -50.0);
    }

    #[test]
    fn distance_sign_is_positive_forward() {
        let mut state = DragState::default();
        state.start(300.0);
        assert_eq!(state.distance_to(180.0), Some(120.0));
        assert_eq!(state.distance_to(420.0), Some(-120.0));
    }
}
