// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles for the gallery views.

pub mod button;
pub mod container;

pub use button::{disabled as button_disabled, overlay as button_overlay};
