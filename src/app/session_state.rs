// SPDX-License-Identifier: MPL-2.0
//! Session storage backed by a CBOR file.
//!
//! The gallery position survives a restart of the window within the same
//! session, but not the end of the session: the file is written on every
//! navigation step and removed when the main window closes.
//!
//! State is stored in CBOR (Concise Binary Object Representation) to keep it
//! apart from the user-editable TOML preferences.
//!
//! # Path Resolution
//!
//! 1. `load_from()` with an explicit directory override
//! 2. `VIEWING_ROOM_DATA_DIR` environment variable
//! 3. Platform-specific data directory

use super::paths;
use crate::application::port::{SessionError, SessionStore};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Session file name within the app data directory.
const SESSION_FILE: &str = "session.cbor";

/// [`SessionStore`] that mirrors every write to disk.
#[derive(Debug, Clone, Default)]
pub struct FileSessionStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FileSessionStore {
    /// Opens the session file from the default location.
    ///
    /// Returns a tuple of (store, optional_warning). An unreadable file yields
    /// an empty store with an i18n warning key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Opens the session file from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = Self::session_file_path_with_override(base_dir);
        let Some(existing) = path.as_deref().filter(|p| p.exists()) else {
            return (
                Self {
                    path,
                    values: BTreeMap::new(),
                },
                None,
            );
        };

        let (values, warning) = match read_values(existing) {
            Ok(values) => (values, None),
            Err(key) => (BTreeMap::new(), Some(key.to_string())),
        };
        (Self { path, values }, warning)
    }

    /// Location of the backing file, if one could be resolved.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn session_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(SESSION_FILE);
            path
        })
    }

    fn persist(&self) -> Result<(), SessionError> {
        let Some(path) = &self.path else {
            return Err(SessionError::NoLocation);
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::WriteFailed(e.to_string()))?;
        }

        let file = fs::File::create(path).map_err(|e| SessionError::WriteFailed(e.to_string()))?;
        ciborium::into_writer(&self.values, BufWriter::new(file))
            .map_err(|e| SessionError::EncodeFailed(e.to_string()))
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>, &'static str> {
    let file = fs::File::open(path).map_err(|_| "notification-session-read-error")?;
    ciborium::from_reader(BufReader::new(file)).map_err(|_| "notification-session-parse-error")
}

impl SessionStore for FileSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.values.clear();
        match &self.path {
            Some(path) if path.exists() => {
                fs::remove_file(path).map_err(|e| SessionError::WriteFailed(e.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_empty_store_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (store, warning) = FileSessionStore::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert!(store.read("@index").is_none());
    }

    #[test]
    fn write_persists_immediately() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let (mut store, _) = FileSessionStore::load_from(base.clone());
        store.write("@index", "3").expect("write should succeed");

        let (reopened, warning) = FileSessionStore::load_from(base);
        assert!(warning.is_none());
        assert_eq!(reopened.read("@index").as_deref(), Some("3"));
    }

    #[test]
    fn clear_removes_the_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (mut store, _) = FileSessionStore::load_from(Some(temp_dir.path().to_path_buf()));
        store.write("INDEX", "1").expect("write should succeed");
        let path = store.path().expect("path resolved").to_path_buf();
        assert!(path.exists());

        store.clear().expect("clear should succeed");
        assert!(!path.exists());
        assert!(store.read("INDEX").is_none());
    }

    #[test]
    fn corrupted_file_returns_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(SESSION_FILE), b"\xff\x00garbage")
            .expect("failed to write garbage");

        let (store, warning) = FileSessionStore::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(
            warning.as_deref(),
            Some("notification-session-parse-error")
        );
        assert!(store.read("@index").is_none());
    }

    #[test]
    fn write_creates_missing_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("a").join("b");
        let (mut store, _) = FileSessionStore::load_from(Some(nested.clone()));
        store.write("@index", "0").expect("write should succeed");
        assert!(nested.join(SESSION_FILE).exists());
    }
}
