// SPDX-License-Identifier: MPL-2.0
//! Visibility flag of the artwork detail overlay.

/// Whether the detail panel for the current artwork is shown.
///
/// The flag belongs to the current position: every successful navigation
/// step switches it off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailOverlayToggle {
    visible: bool,
}

impl DetailOverlayToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips visibility and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Hides the overlay. Returns true if it was visible.
    pub fn force_off(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }
}
