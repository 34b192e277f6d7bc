// SPDX-License-Identifier: MPL-2.0
//! Remote artwork images.
//!
//! - [`asset`]: URL construction per size tier
//! - [`remote`]: Download and dimension probing
//! - [`cache`]: LRU cache of downloaded images

pub mod asset;
pub mod cache;
pub mod remote;

pub use asset::AssetLocator;
pub use cache::{CacheStats, CachedImage, ImageCache};
pub use remote::{fetch_image, read_dimensions, RemoteImage};
