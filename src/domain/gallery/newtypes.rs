// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for gallery settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Swipe threshold bounds in logical pixels.
pub mod swipe_threshold_bounds {
    /// Minimum horizontal travel before a swipe is recognized.
    pub const MIN: f32 = 20.0;
    /// Maximum horizontal travel before a swipe is recognized.
    pub const MAX: f32 = 400.0;
    /// Default horizontal travel before a swipe is recognized.
    pub const DEFAULT: f32 = 100.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Horizontal distance a single pointer must travel to count as a swipe.
///
/// This type ensures that threshold values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    ///
    /// NaN falls back to the default threshold.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(swipe_threshold_bounds::MIN, swipe_threshold_bounds::MAX))
    }

    /// Returns the threshold in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// Transition Delay Bounds
// =============================================================================

/// Transition delay bounds in milliseconds.
pub mod transition_delay_bounds {
    /// Shortest delay (commit on the next runtime turn).
    pub const MIN_MS: u64 = 0;
    /// Longest delay.
    pub const MAX_MS: u64 = 2_000;
}

// =============================================================================
// TransitionDelay
// =============================================================================

/// Pause between a navigation action and the displayed image changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDelay(u64);

impl TransitionDelay {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(
            transition_delay_bounds::MIN_MS,
            transition_delay_bounds::MAX_MS,
        ))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

// =============================================================================
// Cache Capacity Bounds
// =============================================================================

/// Image cache capacity bounds (number of decoded images).
pub mod cache_capacity_bounds {
    /// Minimum number of cached images.
    pub const MIN: usize = 1;
    /// Maximum number of cached images.
    pub const MAX: usize = 64;
    /// Default number of cached images.
    pub const DEFAULT: usize = 8;
}

// =============================================================================
// CacheCapacity
// =============================================================================

/// Number of fetched images kept in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheCapacity(usize);

impl CacheCapacity {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(cache_capacity_bounds::MIN, cache_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for CacheCapacity {
    fn default() -> Self {
        Self(cache_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Event Capacity Bounds
// =============================================================================

/// Diagnostic event buffer bounds.
pub mod event_capacity_bounds {
    /// Minimum number of retained events.
    pub const MIN: usize = 16;
    /// Maximum number of retained events.
    pub const MAX: usize = 4_096;
    /// Default number of retained events.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// EventCapacity
// =============================================================================

/// Capacity of the diagnostic event buffer.
///
/// ```
/// use viewing_room::domain::gallery::{event_capacity_bounds, EventCapacity};
///
/// assert_eq!(EventCapacity::new(0).value(), event_capacity_bounds::MIN);
/// assert_eq!(EventCapacity::new(1_000).value(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCapacity(usize);

impl EventCapacity {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(event_capacity_bounds::MIN, event_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for EventCapacity {
    fn default() -> Self {
        Self(event_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
