// SPDX-License-Identifier: MPL-2.0
//! Geometry and navigation value objects.

/// Viewport width at and above which the wide container fractions apply.
pub const WIDE_VIEWPORT_MIN_WIDTH: f32 = 600.0;

/// Viewport width above which the large asset tier is requested.
pub const LARGE_TIER_MIN_WIDTH: f32 = 960.0;

/// Direction of a navigation step through the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the previous item (lower index).
    Left,
    /// Towards the next item (higher index).
    Right,
}

/// Logical size of the window content area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns true when the viewport is narrower than the wide layout.
    #[must_use]
    pub fn is_narrow(self) -> bool {
        self.width < WIDE_VIEWPORT_MIN_WIDTH
    }
}

/// Intrinsic pixel size of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height, or `None` when either side is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

/// Rendered size of the active image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitResult {
    pub width: f32,
    pub height: f32,
}

impl FitResult {
    /// A zero-area result, produced while the image is still loading.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Resolution tier of a remote asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl SizeTier {
    /// Picks the tier for a viewport width (breakpoints at 600 and 960).
    #[must_use]
    pub fn for_viewport_width(width: f32) -> Self {
        if width > LARGE_TIER_MIN_WIDTH {
            SizeTier::Large
        } else if width > WIDE_VIEWPORT_MIN_WIDTH {
            SizeTier::Medium
        } else {
            SizeTier::Small
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_requires_both_sides() {
        assert_eq!(ImageSize::new(2000, 1000).aspect_ratio(), Some(2.0));
        assert_eq!(ImageSize::new(0, 1000).aspect_ratio(), None);
        assert_eq!(ImageSize::new(1000, 0).aspect_ratio(), None);
    }

    #[test]
    fn size_tier_breakpoints_are_exclusive() {
        assert_eq!(SizeTier::for_viewport_width(1280.0), SizeTier::Large);
        assert_eq!(SizeTier::for_viewport_width(960.0), SizeTier::Medium);
        assert_eq!(SizeTier::for_viewport_width(601.0), SizeTier::Medium);
        assert_eq!(SizeTier::for_viewport_width(600.0), SizeTier::Small);
        assert_eq!(SizeTier::for_viewport_width(320.0), SizeTier::Small);
    }

    #[test]
    fn narrow_viewport_threshold() {
        assert!(ViewportSize::new(599.0, 800.0).is_narrow());
        assert!(!ViewportSize::new(600.0, 800.0).is_narrow());
    }

    #[test]
    fn default_fit_is_degenerate() {
        assert!(FitResult::default().is_degenerate());
        assert!(!FitResult {
            width: 10.0,
            height: 5.0
        }
        .is_degenerate());
    }
}
