// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Gesture bookkeeping kept apart from the navigator's decision logic.

pub mod drag;
pub mod settle;

pub use drag::DragState;
pub use settle::{Settle, SettleKind};
