// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use crate::domain::gallery::Direction;
use std::fmt;
use std::time::Instant;

/// User-initiated gallery actions.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// The index moved by one position.
    Navigate {
        direction: Direction,
        from: usize,
        to: usize,
    },

    /// A swipe crossed the threshold.
    Swipe { direction: Direction },

    /// The detail overlay was flipped.
    ToggleDetail { visible: bool },

    /// The detail overlay was closed without navigating.
    DismissDetail,
}

/// Categories of non-critical issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// The session store could not be read or written.
    Session,
    /// `settings.toml` was unreadable.
    Configuration,
    /// A remote image could not be fetched.
    Network,
    Other,
}

/// Categories of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    Io,
    Network,
    Decode,
    Other,
}

/// A non-critical issue with its message.
#[derive(Debug, Clone, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A failed operation with its message.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Application lifecycle changes.
#[derive(Debug, Clone, PartialEq)]
pub enum AppStateEvent {
    /// The gallery was built.
    Started { layout: String, items: usize },
    /// A persisted index was applied at startup.
    IndexRestored { index: usize },
    /// The displayed artwork changed.
    IndexShown { index: usize },
    /// The window closed and the session store was cleared.
    SessionEnded,
    /// Image cache counters at the end of the session.
    ImageCacheSummary {
        hits: u64,
        misses: u64,
        evictions: u64,
        /// Percentage of lookups served from the cache.
        hit_rate: f64,
    },
}

/// A diagnostic event with its timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and data of a diagnostic event.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    AppState { state: AppStateEvent },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

impl fmt::Display for WarningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WarningType::Session => "session",
            WarningType::Configuration => "configuration",
            WarningType::Network => "network",
            WarningType::Other => "other",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorType::Io => "io",
            ErrorType::Network => "network",
            ErrorType::Decode => "decode",
            ErrorType::Other => "other",
        };
        f.write_str(label)
    }
}
