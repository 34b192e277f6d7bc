// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the gallery core and its adapters.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Adapters (`app::session_state`) implement application layer ports
//! - The gallery core only sees the traits

pub mod port;
