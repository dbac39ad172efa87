// SPDX-License-Identifier: MPL-2.0
//! Framework-independent view state.

pub mod state;
