// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! This module contains the value objects shared by the navigation,
//! gesture and layout logic. None of them depend on a presentation framework.

pub mod newtypes;
mod types;

pub use newtypes::{
    cache_capacity_bounds, event_capacity_bounds, swipe_threshold_bounds,
    transition_delay_bounds, CacheCapacity, EventCapacity, SwipeThreshold, TransitionDelay,
};
pub use types::{
    Direction, FitResult, ImageSize, SizeTier, ViewportSize, LARGE_TIER_MIN_WIDTH,
    WIDE_VIEWPORT_MIN_WIDTH,
};
