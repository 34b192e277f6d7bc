// SPDX-License-Identifier: MPL-2.0
//! Keyboard bindings of the gallery.

use iced::keyboard::{key::Named, Key};

/// Gallery action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    DismissDetail,
    ToggleDetail,
    NavigateLeft,
    NavigateRight,
}

/// Maps a key to its gallery command. Unbound keys yield `None`.
#[must_use]
pub fn command_for_key(key: &Key) -> Option<KeyCommand> {
    match key {
        Key::Named(Named::Escape) => Some(KeyCommand::DismissDetail),
        Key::Named(Named::Space) => Some(KeyCommand::ToggleDetail),
        Key::Named(Named::ArrowLeft) => Some(KeyCommand::NavigateLeft),
        Key::Named(Named::ArrowRight) => Some(KeyCommand::NavigateRight),
        Key::Character(c) if c.as_str() == " " => Some(KeyCommand::ToggleDetail),
        _ => None,
    }
}
