// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, pointer, touch and window events are translated into
//! gallery messages. Events already captured by a widget (a button press, a
//! click inside the detail panel) are not forwarded, so they never start a
//! swipe. Window close requests are always handled for session cleanup.

use super::Message;
use crate::domain::gallery::ViewportSize;
use crate::gallery::{self, command_for_key};
use iced::{event, keyboard, mouse, touch, window, Event, Subscription};

/// Creates the event subscription of the gallery window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        // Window geometry drives the fit calculation regardless of capture.
        if let Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) =
            &event
        {
            return Some(Message::Gallery(gallery::Message::ViewportResized(
                ViewportSize::new(size.width, size.height),
            )));
        }

        match status {
            event::Status::Ignored => route_uncaptured(&event).map(Message::Gallery),
            event::Status::Captured => None,
        }
    })
}

fn route_uncaptured(event: &Event) -> Option<gallery::Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            command_for_key(key).map(gallery::Message::Key)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(gallery::Message::CursorMoved { x: position.x })
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(gallery::Message::PointerPressed)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(gallery::Message::PointerReleased)
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(gallery::Message::TouchPressed {
                finger: id.0,
                x: position.x,
            })
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            Some(gallery::Message::TouchMoved {
                finger: id.0,
                x: position.x,
            })
        }
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) => Some(gallery::Message::TouchLifted { finger: id.0 }),
        _ => None,
    }
}
