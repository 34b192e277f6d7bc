// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Swipe recognition
//! - **Transition**: Staged navigation delays
//! - **Assets**: Remote image locations and caching
//! - **Diagnostics**: Activity log size

use crate::domain::gallery::{cache_capacity_bounds, event_capacity_bounds, swipe_threshold_bounds};

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Horizontal travel (logical pixels) that turns a drag into a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = swipe_threshold_bounds::DEFAULT;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay before the displayed artwork changes when no overlay was open.
pub const DEFAULT_SHORT_TRANSITION_MS: u64 = 10;

/// Delay before the displayed artwork changes when the detail overlay had
/// to fade out first.
pub const DEFAULT_OVERLAY_TRANSITION_MS: u64 = 700;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Base address of the large (> 960 px viewport) rendition.
pub const DEFAULT_LARGE_BASE_URL: &str = "https://images.viewing-room.example/large";

/// Base address of the medium (> 600 px viewport) rendition.
pub const DEFAULT_MEDIUM_BASE_URL: &str = "https://images.viewing-room.example/medium";

/// Base address of the small rendition.
pub const DEFAULT_SMALL_BASE_URL: &str = "https://images.viewing-room.example/small";

/// File extension appended to every catalog identifier.
pub const DEFAULT_IMAGE_EXTENSION: &str = ".jpg";

/// Number of fetched images kept in memory.
pub const DEFAULT_CACHE_IMAGES: usize = cache_capacity_bounds::DEFAULT;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of diagnostic events retained in memory.
pub const DEFAULT_DIAGNOSTICS_EVENTS: usize = event_capacity_bounds::DEFAULT;
