// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped user actions, state changes, warnings and errors
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Channel-fed owner of the buffer

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
