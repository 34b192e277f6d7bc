// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window background the artworks hang on.
pub fn wall(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GALLERY_WALL)),
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Detail panel surface.
///
/// Derived from the active theme background with a slight transparency so the
/// dimmed artwork stays faintly visible behind it.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Startup warning banner.
pub fn notice(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        border: Border {
            color: palette::WARNING_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Placeholder shown while an image loads or after it failed.
pub fn placeholder(error: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(if error {
            palette::ERROR_500
        } else {
            palette::GRAY_200
        }),
        ..Default::default()
    }
}
