// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe recognition.
//!
//! [`GestureInterpreter`] turns a single pointer's horizontal travel into a
//! navigation intent once it exceeds the swipe threshold. Dragging the content
//! to the left reveals the next artwork, so a negative travel yields
//! [`Direction::Right`] and a positive travel yields [`Direction::Left`].
//!
//! [`TouchPoints`] sits in front of the interpreter for touch input and keeps
//! multi-finger contact from reaching it.

use crate::domain::gallery::{Direction, SwipeThreshold};
use std::collections::BTreeSet;

/// Tracking state of the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Tracking {
        start_x: f32,
        /// Set once the pointer moved without reaching the threshold.
        moved: bool,
    },
}

/// Single-pointer swipe state machine (`Idle -> Tracking -> Idle`).
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    state: GestureState,
    threshold: SwipeThreshold,
}

impl GestureInterpreter {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            state: GestureState::Idle,
            threshold,
        }
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Begins tracking from `x`, replacing any gesture in progress.
    pub fn start(&mut self, x: f32) {
        self.state = GestureState::Tracking {
            start_x: x,
            moved: false,
        };
    }

    /// Feeds a new pointer position.
    ///
    /// Returns the navigation intent when the travel crosses the threshold;
    /// the interpreter is then idle until the next [`start`](Self::start).
    pub fn move_to(&mut self, x: f32) -> Option<Direction> {
        let GestureState::Tracking { start_x, moved } = &mut self.state else {
            return None;
        };

        let delta = x - *start_x;
        let threshold = self.threshold.value();

        let intent = if delta < -threshold {
            Some(Direction::Right)
        } else if delta > threshold {
            Some(Direction::Left)
        } else {
            *moved = true;
            None
        };

        if intent.is_some() {
            self.state = GestureState::Idle;
        }
        intent
    }

    /// Ends the gesture without emitting anything.
    pub fn end(&mut self) {
        self.state = GestureState::Idle;
    }
}

/// Set of fingers currently in contact.
///
/// Touch positions are forwarded to the interpreter only while exactly one
/// finger is down.
#[derive(Debug, Clone, Default)]
pub struct TouchPoints {
    down: BTreeSet<u64>,
}

impl TouchPoints {
    /// Registers a finger. Returns true if it is the only one in contact.
    pub fn press(&mut self, finger: u64) -> bool {
        self.down.insert(finger);
        self.is_single()
    }

    /// Returns true if `finger` is the only finger in contact.
    #[must_use]
    pub fn is_sole(&self, finger: u64) -> bool {
        self.is_single() && self.down.contains(&finger)
    }

    /// Unregisters a finger that was lifted or lost.
    pub fn lift(&mut self, finger: u64) {
        self.down.remove(&finger);
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.down.len() == 1
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.down.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpreter() -> GestureInterpreter {
        GestureInterpreter::new(SwipeThreshold::default())
    }

    #[test]
    fn crossing_threshold_emits_once_and_resets() {
        let mut gesture = interpreter();
        gesture.start(100.0);

        assert_eq!(gesture.move_to(250.0), Some(Direction::Left));
        assert_eq!(gesture.state(), GestureState::Idle);

        // No new start: further travel is ignored.
        assert_eq!(gesture.move_to(400.0), None);
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn dragging_left_requests_next_item() {
        let mut gesture = interpreter();
        gesture.start(400.0);
        assert_eq!(gesture.move_to(250.0), Some(Direction::Right));
        assert!(!gesture.is_tracking());
    }

    #[test]
    fn short_travel_keeps_tracking_and_marks_moved() {
        let mut gesture = interpreter();
        gesture.start(100.0);

        assert_eq!(gesture.move_to(150.0), None);
        assert_eq!(
            gesture.state(),
            GestureState::Tracking {
                start_x: 100.0,
                moved: true
            }
        );

        gesture.end();
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn travel_equal_to_threshold_is_not_a_swipe() {
        let mut gesture = interpreter();
        gesture.start(0.0);
        assert_eq!(gesture.move_to(100.0), None);
        assert_eq!(gesture.move_to(-100.0), None);
        assert!(gesture.is_tracking());
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut gesture = interpreter();
        assert_eq!(gesture.move_to(1_000.0), None);
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut gesture = GestureInterpreter::new(SwipeThreshold::new(40.0));
        gesture.start(0.0);
        assert_eq!(gesture.move_to(-41.0), Some(Direction::Right));
    }

    #[test]
    fn touch_points_track_single_contact() {
        let mut touches = TouchPoints::default();
        assert!(touches.press(1));
        assert!(touches.is_sole(1));

        assert!(!touches.press(2));
        assert!(!touches.is_sole(1));
        assert_eq!(touches.count(), 2);

        touches.lift(2);
        assert!(touches.is_sole(1));
        touches.lift(1);
        assert_eq!(touches.count(), 0);
    }
}
