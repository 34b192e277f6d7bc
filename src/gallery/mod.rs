// SPDX-License-Identifier: MPL-2.0
//! Gallery controller.
//!
//! [`Gallery`] owns the navigation state, the swipe interpreter and the
//! transition scheduler, and is driven through [`Message`]s like the other
//! screen components. Each message returns an [`Effect`] the application turns
//! into a task (a timer, an image fetch) or ignores.
//!
//! The logical index changes as soon as a navigation action succeeds. The
//! displayed index follows it either immediately ([`Layout::Plain`]) or once
//! the scheduled transition fires ([`Layout::Bookends`]).

pub mod detail;
pub mod fit;
pub mod gesture;
pub mod input;
pub mod navigation;
pub mod transition;

pub use detail::DetailOverlayToggle;
pub use gesture::{GestureInterpreter, GestureState, TouchPoints};
pub use input::{command_for_key, KeyCommand};
pub use navigation::{Layout, NavigationState, Restore, Step};
pub use transition::{PendingTransition, TransitionScheduler};

use crate::application::port::SessionStore;
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle, UserAction, WarningEvent, WarningType};
use crate::domain::gallery::{
    Direction, FitResult, ImageSize, SizeTier, SwipeThreshold, TransitionDelay, ViewportSize,
};
use std::time::Duration;

/// Viewport assumed until the window reports its real size.
const INITIAL_VIEWPORT: ViewportSize = ViewportSize::new(1024.0, 768.0);

/// Construction parameters of a [`Gallery`].
#[derive(Debug, Clone, Copy)]
pub struct GallerySettings {
    pub layout: Layout,
    pub item_count: usize,
    pub swipe_threshold: SwipeThreshold,
    pub short_delay: TransitionDelay,
    pub overlay_delay: TransitionDelay,
}

/// What occupies a gallery position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Intro,
    Artwork(usize),
    Menu,
}

/// Messages for the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateLeft,
    NavigateRight,
    ToggleDetail,
    DismissDetail,
    Key(KeyCommand),
    CursorMoved { x: f32 },
    PointerPressed,
    PointerReleased,
    TouchPressed { finger: u64, x: f32 },
    TouchMoved { finger: u64, x: f32 },
    TouchLifted { finger: u64 },
    ViewportResized(ViewportSize),
    TransitionElapsed(u64),
}

/// Effects produced by gallery changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Send `Message::TransitionElapsed(seq)` after `delay`.
    ScheduleTransition { seq: u64, delay: Duration },
    /// The displayed position changed.
    ShowIndex(usize),
}

/// Interactive gallery state.
#[derive(Debug)]
pub struct Gallery {
    navigation: NavigationState,
    gesture: GestureInterpreter,
    touches: TouchPoints,
    pointer_down: bool,
    cursor_x: Option<f32>,
    transitions: TransitionScheduler,
    displayed_index: usize,
    item_count: usize,
    viewport: ViewportSize,
    short_delay: TransitionDelay,
    overlay_delay: TransitionDelay,
    diagnostics: DiagnosticsHandle,
}

impl Gallery {
    /// Builds the gallery and restores the index persisted in `store`.
    #[must_use]
    pub fn new(
        settings: GallerySettings,
        store: Box<dyn SessionStore>,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        let mut navigation = NavigationState::new(settings.layout, settings.item_count, store);

        diagnostics.log_state(AppStateEvent::Started {
            layout: settings.layout.to_string(),
            items: settings.item_count,
        });
        match navigation.restore_from_storage() {
            Restore::Restored(index) => {
                diagnostics.log_state(AppStateEvent::IndexRestored { index });
            }
            Restore::Invalid(raw) => diagnostics.log_warning(WarningEvent::new(
                WarningType::Session,
                format!("ignoring non-numeric stored index '{raw}'"),
            )),
            Restore::OutOfRange(value) => diagnostics.log_warning(WarningEvent::new(
                WarningType::Session,
                format!("ignoring stored index {value} outside the gallery"),
            )),
            Restore::Absent => {}
        }

        Self {
            displayed_index: navigation.index(),
            navigation,
            gesture: GestureInterpreter::new(settings.swipe_threshold),
            touches: TouchPoints::default(),
            pointer_down: false,
            cursor_x: None,
            transitions: TransitionScheduler::new(),
            item_count: settings.item_count,
            viewport: INITIAL_VIEWPORT,
            short_delay: settings.short_delay,
            overlay_delay: settings.overlay_delay,
            diagnostics,
        }
    }

    /// Handles a gallery message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::NavigateLeft => self.navigate(Direction::Left),
            Message::NavigateRight => self.navigate(Direction::Right),
            Message::ToggleDetail => {
                self.toggle_detail();
                Effect::None
            }
            Message::DismissDetail => {
                self.dismiss_detail();
                Effect::None
            }
            Message::Key(command) => match command {
                KeyCommand::DismissDetail => self.handle(Message::DismissDetail),
                KeyCommand::ToggleDetail => self.handle(Message::ToggleDetail),
                KeyCommand::NavigateLeft => self.navigate(Direction::Left),
                KeyCommand::NavigateRight => self.navigate(Direction::Right),
            },
            Message::CursorMoved { x } => {
                self.cursor_x = Some(x);
                if self.pointer_down {
                    self.track(x)
                } else {
                    Effect::None
                }
            }
            Message::PointerPressed => {
                self.pointer_down = true;
                if let Some(x) = self.cursor_x {
                    self.gesture.start(x);
                }
                Effect::None
            }
            Message::PointerReleased => {
                self.pointer_down = false;
                self.release();
                Effect::None
            }
            Message::TouchPressed { finger, x } => {
                if self.touches.press(finger) {
                    self.gesture.start(x);
                }
                Effect::None
            }
            Message::TouchMoved { finger, x } => {
                if self.touches.is_sole(finger) {
                    self.track(x)
                } else {
                    Effect::None
                }
            }
            Message::TouchLifted { finger } => {
                let was_sole = self.touches.is_sole(finger);
                self.touches.lift(finger);
                if was_sole {
                    self.release();
                } else {
                    self.gesture.end();
                }
                Effect::None
            }
            Message::ViewportResized(viewport) => {
                self.viewport = viewport;
                Effect::None
            }
            Message::TransitionElapsed(seq) => match self.transitions.complete(seq) {
                Some(target) => self.show(target),
                None => Effect::None,
            },
        }
    }

    fn navigate(&mut self, direction: Direction) -> Effect {
        let Some(step) = self.navigation.move_towards(direction) else {
            return Effect::None;
        };

        self.diagnostics.log_action(UserAction::Navigate {
            direction,
            from: step.from,
            to: step.to,
        });
        if let Some(err) = &step.persist_error {
            self.diagnostics.log_warning(WarningEvent::new(
                WarningType::Session,
                format!("could not persist index {}: {err}", step.to),
            ));
        }

        if !self.navigation.layout().stages_transitions() {
            self.transitions.cancel();
            return self.show(step.to);
        }

        let delay = if step.overlay_was_open {
            self.overlay_delay
        } else {
            self.short_delay
        };
        let pending = self.transitions.schedule(step.to, delay);
        Effect::ScheduleTransition {
            seq: pending.seq,
            delay: delay.as_duration(),
        }
    }

    fn show(&mut self, index: usize) -> Effect {
        self.displayed_index = index;
        self.diagnostics.log_state(AppStateEvent::IndexShown { index });
        Effect::ShowIndex(index)
    }

    fn track(&mut self, x: f32) -> Effect {
        match self.gesture.move_to(x) {
            Some(direction) => {
                self.diagnostics.log_action(UserAction::Swipe { direction });
                self.navigate(direction)
            }
            None => Effect::None,
        }
    }

    /// Ends the pointer gesture; a press released without travel is a tap,
    /// which closes the overlay.
    fn release(&mut self) {
        let tapped = matches!(self.gesture.state(), GestureState::Tracking { moved: false, .. });
        self.gesture.end();
        if tapped {
            self.dismiss_detail();
        }
    }

    fn toggle_detail(&mut self) {
        if self.navigation.toggle_detail() {
            self.diagnostics.log_action(UserAction::ToggleDetail {
                visible: self.navigation.detail_visible(),
            });
        }
    }

    fn dismiss_detail(&mut self) {
        if self.navigation.dismiss_detail() {
            self.diagnostics.log_action(UserAction::DismissDetail);
        }
    }

    /// Clears the session store; called when the window closes.
    pub fn end_session(&mut self) {
        match self.navigation.end_session() {
            Ok(()) => self.diagnostics.log_state(AppStateEvent::SessionEnded),
            Err(err) => self.diagnostics.log_warning(WarningEvent::new(
                WarningType::Session,
                format!("could not clear session: {err}"),
            )),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.navigation.index()
    }

    #[must_use]
    pub fn displayed_index(&self) -> usize {
        self.displayed_index
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.navigation.layout()
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn detail_visible(&self) -> bool {
        self.navigation.detail_visible()
    }

    #[must_use]
    pub fn is_transition_pending(&self) -> bool {
        self.transitions.is_pending()
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// What is on screen right now.
    #[must_use]
    pub fn displayed_position(&self) -> Position {
        self.position_at(self.displayed_index)
    }

    /// What occupies `index` in the current layout.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Position {
        match self.layout().item_at(index, self.item_count) {
            Some(item) => Position::Artwork(item),
            None if index == 0 => Position::Intro,
            None => Position::Menu,
        }
    }

    /// Artworks adjacent to the displayed position, worth fetching ahead.
    #[must_use]
    pub fn neighbour_items(&self) -> Vec<usize> {
        let index = self.displayed_index;
        [index.checked_sub(1), index.checked_add(1)]
            .into_iter()
            .flatten()
            .filter(|&i| i <= self.navigation.max_index())
            .filter_map(|i| self.layout().item_at(i, self.item_count))
            .collect()
    }

    /// Asset tier to request for the current viewport.
    #[must_use]
    pub fn size_tier(&self) -> SizeTier {
        self.layout()
            .fixed_tier()
            .unwrap_or_else(|| SizeTier::for_viewport_width(self.viewport.width))
    }

    /// Rendered size of an image in the current viewport.
    #[must_use]
    pub fn fit_for(&self, image: Option<ImageSize>) -> FitResult {
        fit::fit_image(self.viewport, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MemorySessionStore;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::domain::gallery::EventCapacity;

    fn settings(layout: Layout, item_count: usize) -> GallerySettings {
        GallerySettings {
            layout,
            item_count,
            swipe_threshold: SwipeThreshold::default(),
            short_delay: TransitionDelay::from_millis(10),
            overlay_delay: TransitionDelay::from_millis(700),
        }
    }

    fn gallery_with(
        layout: Layout,
        item_count: usize,
        store: MemorySessionStore,
    ) -> (Gallery, DiagnosticsCollector) {
        let collector = DiagnosticsCollector::new(EventCapacity::default());
        let gallery = Gallery::new(
            settings(layout, item_count),
            Box::new(store),
            collector.handle(),
        );
        (gallery, collector)
    }

    fn gallery(layout: Layout, item_count: usize) -> Gallery {
        gallery_with(layout, item_count, MemorySessionStore::new()).0
    }

    fn settle(gallery: &mut Gallery, effect: Effect) -> Effect {
        match effect {
            Effect::ScheduleTransition { seq, .. } => {
                gallery.handle(Message::TransitionElapsed(seq))
            }
            other => other,
        }
    }

    #[test]
    fn bookends_stage_the_display_change() {
        let mut gallery = gallery(Layout::Bookends, 3);
        let effect = gallery.handle(Message::NavigateRight);

        assert_eq!(gallery.index(), 1);
        assert_eq!(gallery.displayed_index(), 0);
        assert_eq!(
            effect,
            Effect::ScheduleTransition {
                seq: 1,
                delay: Duration::from_millis(10)
            }
        );

        assert_eq!(settle(&mut gallery, effect), Effect::ShowIndex(1));
        assert_eq!(gallery.displayed_index(), 1);
    }

    #[test]
    fn open_overlay_lengthens_the_transition() {
        let mut gallery = gallery(Layout::Bookends, 3);
        let effect = gallery.handle(Message::NavigateRight);
        settle(&mut gallery, effect);
        gallery.handle(Message::ToggleDetail);
        assert!(gallery.detail_visible());

        let effect = gallery.handle(Message::NavigateRight);
        assert!(!gallery.detail_visible());
        assert!(matches!(
            effect,
            Effect::ScheduleTransition { delay, .. } if delay == Duration::from_millis(700)
        ));
    }

    #[test]
    fn superseded_transition_does_not_roll_back() {
        let mut gallery = gallery(Layout::Bookends, 5);
        let first = gallery.handle(Message::NavigateRight);
        let second = gallery.handle(Message::NavigateRight);

        let Effect::ScheduleTransition { seq: stale, .. } = first else {
            panic!("expected a scheduled transition");
        };
        assert_eq!(gallery.handle(Message::TransitionElapsed(stale)), Effect::None);
        assert_eq!(gallery.displayed_index(), 0);

        assert_eq!(settle(&mut gallery, second), Effect::ShowIndex(2));
    }

    #[test]
    fn plain_layout_shows_immediately() {
        let mut gallery = gallery(Layout::Plain, 3);
        assert_eq!(gallery.handle(Message::NavigateRight), Effect::ShowIndex(1));
        assert_eq!(gallery.displayed_index(), 1);
        assert!(!gallery.is_transition_pending());
    }

    #[test]
    fn blocked_navigation_has_no_effect() {
        let mut gallery = gallery(Layout::Plain, 2);
        assert_eq!(gallery.handle(Message::NavigateLeft), Effect::None);
        gallery.handle(Message::NavigateRight);
        assert_eq!(gallery.handle(Message::NavigateRight), Effect::None);
        assert_eq!(gallery.index(), 1);
    }

    #[test]
    fn keys_drive_navigation_and_overlay() {
        let mut gallery = gallery(Layout::Plain, 3);
        gallery.handle(Message::Key(KeyCommand::NavigateRight));
        gallery.handle(Message::Key(KeyCommand::ToggleDetail));
        assert!(gallery.detail_visible());

        gallery.handle(Message::Key(KeyCommand::DismissDetail));
        assert!(!gallery.detail_visible());

        gallery.handle(Message::Key(KeyCommand::NavigateLeft));
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn plain_layout_opens_detail_on_first_artwork() {
        let mut gallery = gallery(Layout::Plain, 3);
        gallery.handle(Message::Key(KeyCommand::ToggleDetail));
        assert!(gallery.detail_visible());

        let effect = gallery.handle(Message::NavigateRight);
        assert_eq!(effect, Effect::ShowIndex(1));
        assert!(!gallery.detail_visible());
    }

    #[test]
    fn mouse_drag_swipes() {
        let mut gallery = gallery(Layout::Plain, 3);
        gallery.handle(Message::CursorMoved { x: 500.0 });
        gallery.handle(Message::PointerPressed);
        gallery.handle(Message::CursorMoved { x: 450.0 });
        assert_eq!(gallery.index(), 0);

        let effect = gallery.handle(Message::CursorMoved { x: 350.0 });
        assert_eq!(effect, Effect::ShowIndex(1));

        // One swipe per press.
        gallery.handle(Message::CursorMoved { x: 100.0 });
        assert_eq!(gallery.index(), 1);
    }

    #[test]
    fn cursor_motion_without_press_is_ignored() {
        let mut gallery = gallery(Layout::Plain, 3);
        gallery.handle(Message::CursorMoved { x: 500.0 });
        gallery.handle(Message::CursorMoved { x: 0.0 });
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn tap_closes_the_overlay() {
        let mut gallery = gallery(Layout::Plain, 3);
        gallery.handle(Message::NavigateRight);
        gallery.handle(Message::ToggleDetail);

        gallery.handle(Message::CursorMoved { x: 300.0 });
        gallery.handle(Message::PointerPressed);
        gallery.handle(Message::PointerReleased);
        assert!(!gallery.detail_visible());
    }

    #[test]
    fn short_drag_keeps_the_overlay() {
        let mut gallery = gallery(Layout::Plain, 3);
        gallery.handle(Message::NavigateRight);
        gallery.handle(Message::ToggleDetail);

        gallery.handle(Message::TouchPressed { finger: 1, x: 300.0 });
        gallery.handle(Message::TouchMoved { finger: 1, x: 330.0 });
        gallery.handle(Message::TouchLifted { finger: 1 });
        assert!(gallery.detail_visible());
    }

    #[test]
    fn touch_swipe_to_the_right_goes_back() {
        let mut gallery = gallery(Layout::Plain, 3);
        gallery.handle(Message::NavigateRight);

        gallery.handle(Message::TouchPressed { finger: 7, x: 100.0 });
        let effect = gallery.handle(Message::TouchMoved { finger: 7, x: 250.0 });
        assert_eq!(effect, Effect::ShowIndex(0));
    }

    #[test]
    fn second_finger_suspends_swipes() {
        let mut gallery = gallery(Layout::Plain, 3);
        gallery.handle(Message::TouchPressed { finger: 1, x: 400.0 });
        gallery.handle(Message::TouchPressed { finger: 2, x: 600.0 });

        gallery.handle(Message::TouchMoved { finger: 1, x: 100.0 });
        gallery.handle(Message::TouchMoved { finger: 2, x: 100.0 });
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn restores_and_logs_the_persisted_index() {
        let store = MemorySessionStore::with_value("@index", "2");
        let (gallery, mut collector) = gallery_with(Layout::Bookends, 4, store);
        assert_eq!(gallery.index(), 2);
        assert_eq!(gallery.displayed_index(), 2);

        collector.process_pending();
        assert!(collector.events().any(|event| event.kind
            == DiagnosticEventKind::AppState {
                state: AppStateEvent::IndexRestored { index: 2 }
            }));
    }

    #[test]
    fn invalid_stored_index_is_reported_as_warning() {
        let store = MemorySessionStore::with_value("INDEX", "abc");
        let (gallery, mut collector) = gallery_with(Layout::Plain, 4, store);
        assert_eq!(gallery.index(), 0);

        collector.process_pending();
        assert_eq!(collector.problem_count(), 1);
    }

    #[test]
    fn positions_follow_the_layout() {
        let bookends = gallery(Layout::Bookends, 2);
        assert_eq!(bookends.position_at(0), Position::Intro);
        assert_eq!(bookends.position_at(1), Position::Artwork(0));
        assert_eq!(bookends.position_at(3), Position::Menu);

        let plain = gallery(Layout::Plain, 2);
        assert_eq!(plain.position_at(0), Position::Artwork(0));
    }

    #[test]
    fn neighbours_skip_bookends() {
        let mut gallery = gallery(Layout::Bookends, 3);
        assert_eq!(gallery.neighbour_items(), vec![0]);

        let effect = gallery.handle(Message::NavigateRight);
        settle(&mut gallery, effect);
        assert_eq!(gallery.neighbour_items(), vec![1]);

        let effect = gallery.handle(Message::NavigateRight);
        settle(&mut gallery, effect);
        assert_eq!(gallery.neighbour_items(), vec![0, 2]);
    }

    #[test]
    fn size_tier_depends_on_layout() {
        let mut plain = gallery(Layout::Plain, 1);
        plain.handle(Message::ViewportResized(ViewportSize::new(500.0, 800.0)));
        assert_eq!(plain.size_tier(), SizeTier::Small);
        plain.handle(Message::ViewportResized(ViewportSize::new(800.0, 800.0)));
        assert_eq!(plain.size_tier(), SizeTier::Medium);

        let mut bookends = gallery(Layout::Bookends, 1);
        bookends.handle(Message::ViewportResized(ViewportSize::new(500.0, 800.0)));
        assert_eq!(bookends.size_tier(), SizeTier::Large);
    }

    #[test]
    fn fit_tracks_viewport() {
        let mut gallery = gallery(Layout::Plain, 1);
        gallery.handle(Message::ViewportResized(ViewportSize::new(1000.0, 800.0)));
        let fit = gallery.fit_for(Some(ImageSize::new(2000, 1000)));
        assert_eq!(fit.width, 500.0);
        assert!((fit.height - 250.0).abs() < 1e-3);
    }

    #[test]
    fn end_session_clears_the_store() {
        let mut gallery = gallery(Layout::Plain, 3);
        gallery.handle(Message::NavigateRight);
        gallery.end_session();

        assert_eq!(gallery.navigation.restore_from_storage(), Restore::Absent);
    }
}
