// SPDX-License-Identifier: MPL-2.0
//! Session store port definition.
//!
//! The gallery remembers its position for the lifetime of a session: the
//! index is written on every navigation step and read once at startup.
//! [`SessionStore`] is the seam between the navigation state and whatever
//! keeps that value alive (a file in the data directory for the desktop
//! application, a map in tests).

use std::collections::HashMap;
use std::fmt;

// =============================================================================
// SessionError
// =============================================================================

/// Errors that can occur while persisting session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No location is available for the session file.
    NoLocation,

    /// The backing storage could not be written.
    WriteFailed(String),

    /// The session data could not be encoded.
    EncodeFailed(String),
}

impl SessionError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SessionError::NoLocation => "notification-session-path-error",
            SessionError::WriteFailed(_) => "notification-session-write-error",
            SessionError::EncodeFailed(_) => "notification-session-encode-error",
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoLocation => write!(f, "No session storage location"),
            SessionError::WriteFailed(msg) => write!(f, "Session write failed: {msg}"),
            SessionError::EncodeFailed(msg) => write!(f, "Session encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

// =============================================================================
// SessionStore Trait
// =============================================================================

/// String-keyed storage scoped to one browsing session.
///
/// # Example
///
/// ```
/// use viewing_room::application::port::{MemorySessionStore, SessionStore};
///
/// let mut store = MemorySessionStore::new();
/// store.write("INDEX", "4").unwrap();
/// assert_eq!(store.read("INDEX").as_deref(), Some("4"));
/// ```
pub trait SessionStore {
    /// Returns the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the value could not be persisted.
    fn write(&mut self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Drops every value, ending the session.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the backing storage could not be removed.
    fn clear(&mut self) -> Result<(), SessionError>;
}

// =============================================================================
// MemorySessionStore
// =============================================================================

/// Session store that lives only as long as the value itself.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slots: HashMap<String, String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a single value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), value.to_string());
        Self { slots }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.slots.clear();
        Ok(())
    }
}
