// SPDX-License-Identifier: MPL-2.0
//! Ordered list of the artworks shown in the gallery.
//!
//! A catalog is a TOML file with one `[[artwork]]` table per work. The order
//! of the tables is the walking order of the gallery and does not change for
//! the lifetime of the application. A default catalog is embedded in the
//! binary; `--catalog <path>` replaces it.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const EMBEDDED_CATALOG: &str = "default.toml";

/// One work of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artwork {
    /// Asset identifier, combined with the base address to build image URLs.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "artwork")]
    artworks: Vec<Artwork>,
}

/// Non-empty, ordered collection of artworks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Builds a catalog from a list of artworks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the list is empty or an identifier is blank.
    pub fn new(artworks: Vec<Artwork>) -> Result<Self> {
        if artworks.is_empty() {
            return Err(Error::Catalog("the catalog has no artworks".to_string()));
        }
        if let Some(position) = artworks.iter().position(|a| a.id.trim().is_empty()) {
            return Err(Error::Catalog(format!(
                "artwork #{} has an empty id",
                position + 1
            )));
        }
        Ok(Self { artworks })
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] on malformed TOML or an invalid list.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| Error::Catalog(e.to_string()))?;
        Self::new(file.artworks)
    }

    /// Reads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, [`Error::Catalog`] if
    /// its content is invalid.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The catalog shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the embedded file is missing or invalid.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_CATALOG)
            .ok_or_else(|| Error::Catalog("embedded catalog is missing".to_string()))?;
        Self::from_toml(&String::from_utf8_lossy(file.data.as_ref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    /// Never true for a catalog built through [`Catalog::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.artworks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter()
    }
}

/// Loads the catalog at `path`, or the embedded one when `path` is `None`.
///
/// An unreadable custom catalog falls back to the embedded one with an i18n
/// warning key.
///
/// # Errors
///
/// Returns an error only if the embedded catalog itself is unusable.
pub fn load(path: Option<&Path>) -> Result<(Catalog, Option<String>)> {
    if let Some(path) = path {
        match Catalog::load_from_path(path) {
            Ok(catalog) => return Ok((catalog, None)),
            Err(err) => {
                eprintln!("Failed to load catalog {}: {err}", path.display());
                return Catalog::embedded()
                    .map(|catalog| (catalog, Some("notification-catalog-load-error".to_string())));
            }
        }
    }
    Catalog::embedded().map(|catalog| (catalog, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_WORKS: &str = r#"
[[artwork]]
id = "first"
title = "First"
artist = "A. Painter"

[[artwork]]
id = "second"
title = "Second"
year = "1999"
"#;

    #[test]
    fn parses_works_in_order() {
        let catalog = Catalog::from_toml(TWO_WORKS).expect("valid catalog");
        assert_eq!(catalog.len(), 2);
        let ids: Vec<_> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
        assert_eq!(catalog.get(0).and_then(|a| a.artist.as_deref()), Some("A. Painter"));
        assert_eq!(catalog.get(1).and_then(|a| a.year.as_deref()), Some("1999"));
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::from_toml("").expect_err("no artworks");
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = Catalog::from_toml("[[artwork]]\nid = \" \"\ntitle = \"x\"")
            .expect_err("blank id");
        assert!(matches!(err, Error::Catalog(message) if message.contains("#1")));
    }

    #[test]
    fn malformed_toml_is_a_catalog_error() {
        let err = Catalog::from_toml("[[artwork]\nid =").expect_err("malformed");
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().expect("embedded catalog parses");
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|a| !a.title.is_empty()));
    }

    #[test]
    fn load_prefers_custom_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("room.toml");
        fs::write(&path, TWO_WORKS).expect("failed to write catalog");

        let (catalog, warning) = load(Some(&path)).expect("catalog loads");
        assert!(warning.is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_falls_back_to_embedded_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing.toml");

        let (catalog, warning) = load(Some(&path)).expect("embedded fallback");
        assert_eq!(catalog, Catalog::embedded().expect("embedded"));
        assert_eq!(warning.as_deref(), Some("notification-catalog-load-error"));
    }
}
