// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[gallery]` - Layout and swipe sensitivity
//! - `[transition]` - Delays between a navigation action and the image change
//! - `[assets]` - Remote image locations and in-memory cache size
//!
//! # Examples
//!
//! ```no_run
//! use viewing_room::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::{CacheCapacity, SizeTier, SwipeThreshold, TransitionDelay};
use crate::error::Result;
use crate::gallery::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Gallery navigation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Whether intro and menu screens frame the artworks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// Swipe distance in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,
}

/// Staged navigation delays.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_delay_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_delay_ms: Option<u64>,
}

/// Remote image settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_base_url: Option<String>,

    /// Extension appended to catalog identifiers, including the dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Number of fetched images kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_images: Option<usize>,
}

// =============================================================================
// Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub transition: TransitionConfig,

    #[serde(default)]
    pub assets: AssetsConfig,
}

impl Config {
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.gallery.layout.unwrap_or_default()
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        SwipeThreshold::new(
            self.gallery
                .swipe_threshold
                .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
        )
    }

    #[must_use]
    pub fn short_delay(&self) -> TransitionDelay {
        TransitionDelay::from_millis(
            self.transition
                .short_delay_ms
                .unwrap_or(DEFAULT_SHORT_TRANSITION_MS),
        )
    }

    #[must_use]
    pub fn overlay_delay(&self) -> TransitionDelay {
        TransitionDelay::from_millis(
            self.transition
                .overlay_delay_ms
                .unwrap_or(DEFAULT_OVERLAY_TRANSITION_MS),
        )
    }

    /// Base address for the given rendition tier, without a trailing slash.
    #[must_use]
    pub fn base_url(&self, tier: SizeTier) -> &str {
        let (configured, fallback) = match tier {
            SizeTier::Large => (&self.assets.large_base_url, DEFAULT_LARGE_BASE_URL),
            SizeTier::Medium => (&self.assets.medium_base_url, DEFAULT_MEDIUM_BASE_URL),
            SizeTier::Small => (&self.assets.small_base_url, DEFAULT_SMALL_BASE_URL),
        };
        configured
            .as_deref()
            .unwrap_or(fallback)
            .trim_end_matches('/')
    }

    #[must_use]
    pub fn image_extension(&self) -> &str {
        self.assets
            .extension
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_EXTENSION)
    }

    #[must_use]
    pub fn cache_capacity(&self) -> CacheCapacity {
        CacheCapacity::new(self.assets.cache_images.unwrap_or(DEFAULT_CACHE_IMAGES))
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            gallery: GalleryConfig {
                layout: Some(Layout::Plain),
                swipe_threshold: Some(80.0),
            },
            transition: TransitionConfig {
                short_delay_ms: Some(0),
                overlay_delay_ms: Some(350),
            },
            assets: AssetsConfig {
                large_base_url: Some("https://cdn.test/lg".to_string()),
                ..AssetsConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_warns_and_defaults_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery]\nlayout = 42")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn layout_parses_kebab_case() {
        let config: Config = toml::from_str("[gallery]\nlayout = \"plain\"").expect("parse");
        assert_eq!(config.layout(), Layout::Plain);
        assert_eq!(Config::default().layout(), Layout::Bookends);
    }

    #[test]
    fn accessors_apply_defaults_and_clamping() {
        let mut config = Config::default();
        assert_eq!(config.swipe_threshold().value(), DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(config.short_delay().as_millis(), DEFAULT_SHORT_TRANSITION_MS);
        assert_eq!(
            config.overlay_delay().as_millis(),
            DEFAULT_OVERLAY_TRANSITION_MS
        );
        assert_eq!(config.image_extension(), DEFAULT_IMAGE_EXTENSION);

        config.gallery.swipe_threshold = Some(1.0);
        config.assets.cache_images = Some(0);
        assert_eq!(config.swipe_threshold().value(), 20.0);
        assert_eq!(config.cache_capacity().value(), 1);
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let mut config = Config::default();
        config.assets.small_base_url = Some("https://cdn.test/xs/".to_string());
        assert_eq!(config.base_url(SizeTier::Small), "https://cdn.test/xs");
        assert_eq!(config.base_url(SizeTier::Large), DEFAULT_LARGE_BASE_URL);
    }
}
