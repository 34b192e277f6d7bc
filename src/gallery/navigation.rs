// SPDX-License-Identifier: MPL-2.0
//! Position of the gallery within its ordered list of items.
//!
//! [`NavigationState`] owns the current index, its bounds, the detail overlay
//! flag and the session store the index is persisted to. The index only ever
//! moves by one step and stops at either bound; every successful step hides
//! the overlay and writes the new index to the store.

use crate::application::port::{SessionError, SessionStore};
use crate::domain::gallery::{Direction, SizeTier};
use crate::gallery::detail::DetailOverlayToggle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Layout
// =============================================================================

/// How catalog items map onto gallery positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Intro screen at 0, artworks at `1..=N`, menu screen at `N + 1`.
    #[default]
    Bookends,
    /// Artworks only, at `0..N`.
    Plain,
}

impl Layout {
    /// Session key the index is persisted under.
    #[must_use]
    pub fn session_key(self) -> &'static str {
        match self {
            Layout::Bookends => "@index",
            Layout::Plain => "INDEX",
        }
    }

    /// Highest reachable position for a catalog of `count` items.
    #[must_use]
    pub fn max_index(self, count: usize) -> usize {
        match self {
            Layout::Bookends => count + 1,
            Layout::Plain => count.saturating_sub(1),
        }
    }

    /// Catalog item shown at `index`, or `None` on an intro/menu position.
    #[must_use]
    pub fn item_at(self, index: usize, count: usize) -> Option<usize> {
        let item = match self {
            Layout::Bookends => index.checked_sub(1)?,
            Layout::Plain => index,
        };
        (item < count).then_some(item)
    }

    /// Asset tier this layout always requests, if it ignores the viewport.
    #[must_use]
    pub fn fixed_tier(self) -> Option<SizeTier> {
        match self {
            Layout::Bookends => Some(SizeTier::Large),
            Layout::Plain => None,
        }
    }

    /// Whether the displayed artwork follows the index after a pause.
    #[must_use]
    pub fn stages_transitions(self) -> bool {
        matches!(self, Layout::Bookends)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Bookends => write!(f, "bookends"),
            Layout::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bookends" => Ok(Layout::Bookends),
            "plain" => Ok(Layout::Plain),
            other => Err(format!("unknown layout '{other}'")),
        }
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// What [`NavigationState::restore_from_storage`] found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restore {
    /// The stored index was applied.
    Restored(usize),
    /// Nothing was stored.
    Absent,
    /// The stored value is not an integer.
    Invalid(String),
    /// The stored integer lies outside the current bounds.
    OutOfRange(i64),
}

/// A successful one-position move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// The detail overlay was open and has been closed by this step.
    pub overlay_was_open: bool,
    /// Set when the new index could not be written to the session store.
    pub persist_error: Option<SessionError>,
}

// =============================================================================
// NavigationState
// =============================================================================

/// Current gallery position, clamped to `[min_index, max_index]`.
pub struct NavigationState {
    index: usize,
    min_index: usize,
    max_index: usize,
    layout: Layout,
    item_count: usize,
    detail: DetailOverlayToggle,
    store: Box<dyn SessionStore>,
}

impl fmt::Debug for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationState")
            .field("index", &self.index)
            .field("min_index", &self.min_index)
            .field("max_index", &self.max_index)
            .field("layout", &self.layout)
            .field("detail", &self.detail)
            .finish_non_exhaustive()
    }
}

impl NavigationState {
    /// Creates a state at index 0 with bounds derived from the item count.
    #[must_use]
    pub fn new(layout: Layout, item_count: usize, store: Box<dyn SessionStore>) -> Self {
        Self {
            index: 0,
            min_index: 0,
            max_index: layout.max_index(item_count),
            layout,
            item_count,
            detail: DetailOverlayToggle::new(),
            store,
        }
    }

    /// Seeds the index from the session store.
    ///
    /// Anything that is not an in-bounds integer leaves the default index.
    pub fn restore_from_storage(&mut self) -> Restore {
        let Some(raw) = self.store.read(self.layout.session_key()) else {
            return Restore::Absent;
        };

        let Ok(value) = raw.trim().parse::<i64>() else {
            return Restore::Invalid(raw);
        };

        match usize::try_from(value) {
            Ok(index) if (self.min_index..=self.max_index).contains(&index) => {
                self.index = index;
                Restore::Restored(index)
            }
            _ => Restore::OutOfRange(value),
        }
    }

    /// Moves one position towards `min_index`. No-op at the bound.
    pub fn move_left(&mut self) -> Option<Step> {
        if self.index <= self.min_index {
            return None;
        }
        Some(self.step_to(self.index - 1, Direction::Left))
    }

    /// Moves one position towards `max_index`. No-op at the bound.
    pub fn move_right(&mut self) -> Option<Step> {
        if self.index >= self.max_index {
            return None;
        }
        Some(self.step_to(self.index + 1, Direction::Right))
    }

    /// Moves one position in `direction`.
    pub fn move_towards(&mut self, direction: Direction) -> Option<Step> {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }

    fn step_to(&mut self, to: usize, direction: Direction) -> Step {
        let from = self.index;
        self.index = to;
        let overlay_was_open = self.detail.force_off();
        let persist_error = self
            .store
            .write(self.layout.session_key(), &to.to_string())
            .err();

        Step {
            from,
            to,
            direction,
            overlay_was_open,
            persist_error,
        }
    }

    /// Flips the detail overlay when the index shows an artwork. Bookend
    /// positions have no detail view. Returns true if the flag changed.
    pub fn toggle_detail(&mut self) -> bool {
        if self.has_detail() {
            self.detail.toggle();
            true
        } else {
            false
        }
    }

    /// Hides the detail overlay. Returns true if it was visible.
    pub fn dismiss_detail(&mut self) -> bool {
        self.detail.force_off()
    }

    /// Ends the session, dropping the persisted index.
    ///
    /// # Errors
    ///
    /// Returns the store's error if its backing storage could not be removed.
    pub fn end_session(&mut self) -> Result<(), SessionError> {
        self.store.clear()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn min_index(&self) -> usize {
        self.min_index
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.max_index
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn detail_visible(&self) -> bool {
        self.detail.is_visible()
    }

    #[must_use]
    pub fn can_move_left(&self) -> bool {
        self.index > self.min_index
    }

    #[must_use]
    pub fn can_move_right(&self) -> bool {
        self.index < self.max_index
    }

    /// Whether the detail overlay may be opened at the current index.
    #[must_use]
    pub fn has_detail(&self) -> bool {
        self.item_index().is_some()
    }

    /// Catalog item at the current index.
    #[must_use]
    pub fn item_index(&self) -> Option<usize> {
        self.layout.item_at(self.index, self.item_count)
    }
}
