// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they read
//! the [`Gallery`](crate::gallery::Gallery) and emit gallery messages, never
//! mutating state themselves.
//!
//! # Screens
//!
//! - [`gallery_view`] - Displayed artwork with arrows, indicator and detail button
//! - [`detail_panel`] - Artwork description shown over the dimmed image
//! - [`bookends`] - Intro and menu screens of the bookend layout
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod bookends;
pub mod design_tokens;
pub mod detail_panel;
pub mod gallery_view;
pub mod styles;
