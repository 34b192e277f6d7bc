// SPDX-License-Identifier: MPL-2.0
//! Responsive sizing of the active artwork.
//!
//! The image is drawn inside a container that takes a fixed share of the
//! viewport, then scaled to the largest rectangle with the image's aspect
//! ratio that fits in that container. Both steps are pure; callers recompute
//! whenever the viewport or the decoded image changes.

use crate::domain::gallery::{FitResult, ImageSize, ViewportSize};

/// Share of the viewport width used by the container on wide viewports.
const WIDE_WIDTH_FRACTION: f32 = 0.5;

/// Share of the viewport width used by the container on narrow viewports.
const NARROW_WIDTH_FRACTION: f32 = 2.0 / 3.0;

/// Share of the viewport height used by the container.
const HEIGHT_FRACTION: f32 = 0.6;

/// Returns the box the artwork must fit in for the given viewport.
#[must_use]
pub fn container_size(viewport: ViewportSize) -> FitResult {
    let width_fraction = if viewport.is_narrow() {
        NARROW_WIDTH_FRACTION
    } else {
        WIDE_WIDTH_FRACTION
    };

    FitResult {
        width: viewport.width * width_fraction,
        height: viewport.height * HEIGHT_FRACTION,
    }
}

/// Computes the rendered size of an image inside the responsive container.
///
/// `image` is `None` (or has a zero side) until the image has been decoded;
/// the result is then zero-height and the caller shows a loading state.
///
/// # Example
///
/// ```
/// use viewing_room::domain::gallery::{ImageSize, ViewportSize};
/// use viewing_room::gallery::fit::fit_image;
///
/// let fit = fit_image(ViewportSize::new(1000.0, 800.0), Some(ImageSize::new(2000, 1000)));
/// assert_eq!((fit.width, fit.height), (500.0, 250.0));
/// ```
#[must_use]
pub fn fit_image(viewport: ViewportSize, image: Option<ImageSize>) -> FitResult {
    let container = container_size(viewport);
    let image_aspect = image.and_then(ImageSize::aspect_ratio);

    if container.height <= 0.0 {
        return FitResult::default();
    }

    match image_aspect {
        Some(aspect) if container.width / container.height > aspect => {
            // Container is relatively wider: height is the binding side.
            FitResult {
                width: container.height * aspect,
                height: container.height,
            }
        }
        Some(aspect) => FitResult {
            width: container.width,
            height: container.width / aspect,
        },
        None => FitResult {
            width: container.width,
            height: 0.0,
        },
    }
}
