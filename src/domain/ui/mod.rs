// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains gesture tuning value objects that are independent
//! of any presentation framework.

pub mod newtypes;

pub use newtypes::{DragResistance, SettleDuration, SwipeThreshold};
