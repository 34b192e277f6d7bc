// SPDX-License-Identifier: MPL-2.0
//! Remote artwork download.
//!
//! Images are fetched over HTTPS with `reqwest`, streamed into memory with a
//! size cap, and read with `image` for their intrinsic dimensions so the
//! gallery can size them before the renderer decodes them.

use crate::domain::gallery::ImageSize;
use crate::error::{Error, Result};
use std::io::Cursor;

/// Largest accepted response body (32 MB).
const MAX_IMAGE_BYTES: usize = 32 * 1024 * 1024;

const USER_AGENT: &str = concat!("ViewingRoom/", env!("CARGO_PKG_VERSION"));

/// A downloaded, not yet decoded image.
#[derive(Debug, Clone)]
pub struct RemoteImage {
    pub url: String,
    pub bytes: Vec<u8>,
    pub size: ImageSize,
}

/// Downloads the image at `url` and reads its dimensions.
///
/// # Errors
///
/// Returns [`Error::Network`] for transport failures, non-success statuses or
/// oversized bodies, and [`Error::Decode`] if the body is not a readable image.
pub async fn fetch_image(url: String) -> Result<RemoteImage> {
    use futures_util::StreamExt;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let expected = response
        .content_length()
        .and_then(|len| usize::try_from(len).ok())
        .unwrap_or(0);
    if expected > MAX_IMAGE_BYTES {
        return Err(Error::Network(format!(
            "Response too large ({expected} bytes)"
        )));
    }

    let mut bytes = Vec::with_capacity(expected);
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
            return Err(Error::Network(format!(
                "Response exceeds {MAX_IMAGE_BYTES} bytes"
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    let size = read_dimensions(&bytes)?;
    Ok(RemoteImage { url, bytes, size })
}

/// Reads the intrinsic size of an encoded image without decoding pixels.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the format is unknown or the header is invalid.
pub fn read_dimensions(bytes: &[u8]) -> Result<ImageSize> {
    let reader = image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::Decode(e.to_string()))?;

    if reader.format().is_none() {
        return Err(Error::Decode("unrecognized image format".to_string()));
    }

    let (width, height) = reader.into_dimensions()?;
    Ok(ImageSize::new(width, height))
}
