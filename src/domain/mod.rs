// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery value objects ([`ViewportSize`](gallery::ViewportSize),
//!   [`ImageSize`](gallery::ImageSize), [`FitResult`](gallery::FitResult),
//!   [`SizeTier`](gallery::SizeTier)) and clamped settings
//!   ([`SwipeThreshold`](gallery::SwipeThreshold),
//!   [`TransitionDelay`](gallery::TransitionDelay))

pub mod gallery;
