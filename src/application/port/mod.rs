// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`session`]: Session-scoped persistence of the gallery position
//!
//! # Design Notes
//!
//! - Traits use plain strings and domain types only (no Iced handles)
//! - Methods return `Result` with port-specific error types
//! - No `async fn`; adapters are synchronous and cheap

pub mod session;

pub use session::{MemorySessionStore, SessionError, SessionStore};
