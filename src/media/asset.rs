// SPDX-License-Identifier: MPL-2.0
//! Construction of remote image addresses.

use crate::config::Config;
use crate::domain::gallery::SizeTier;

/// Builds image URLs from a base address per tier, an identifier and an
/// extension: `{base}/{id}{extension}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocator {
    large: String,
    medium: String,
    small: String,
    extension: String,
}

impl AssetLocator {
    #[must_use]
    pub fn new(large: &str, medium: &str, small: &str, extension: &str) -> Self {
        Self {
            large: large.trim_end_matches('/').to_string(),
            medium: medium.trim_end_matches('/').to_string(),
            small: small.trim_end_matches('/').to_string(),
            extension: extension.to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.base_url(SizeTier::Large),
            config.base_url(SizeTier::Medium),
            config.base_url(SizeTier::Small),
            config.image_extension(),
        )
    }

    #[must_use]
    pub fn url_for(&self, tier: SizeTier, id: &str) -> String {
        let base = match tier {
            SizeTier::Large => &self.large,
            SizeTier::Medium => &self.medium,
            SizeTier::Small => &self.small,
        };
        format!("{base}/{id}{}", self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_id_and_extension() {
        let locator = AssetLocator::new("https://a.test/lg/", "https://a.test/md", "https://a.test/xs", ".jpg");
        assert_eq!(
            locator.url_for(SizeTier::Large, "night-ferry"),
            "https://a.test/lg/night-ferry.jpg"
        );
        assert_eq!(
            locator.url_for(SizeTier::Small, "night-ferry"),
            "https://a.test/xs/night-ferry.jpg"
        );
    }

    #[test]
    fn from_config_uses_configured_values() {
        let mut config = Config::default();
        config.assets.medium_base_url = Some("https://cdn.test/md".to_string());
        config.assets.extension = Some(".webp".to_string());

        let locator = AssetLocator::from_config(&config);
        assert_eq!(
            locator.url_for(SizeTier::Medium, "x"),
            "https://cdn.test/md/x.webp"
        );
    }
}
