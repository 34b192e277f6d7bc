// SPDX-License-Identifier: MPL-2.0
//! Detail panel describing the displayed artwork.
//!
//! Shown over the dimmed artwork while the detail overlay is open. The panel
//! carries its own close button; clicks outside it reach the backdrop and
//! dismiss the overlay through the gallery's tap handling.

use crate::catalog::Artwork;
use crate::gallery::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, opaque, Column, Container, Row, Scrollable, Space, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub artwork: &'a Artwork,
}

/// Renders the panel, aligned to the right edge of the window.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new(ctx.i18n.tr("detail-close")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(Message::DismissDetail);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(Text::new(ctx.artwork.title.as_str()).size(typography::TITLE_MD));

    for (label_key, value) in [
        ("detail-artist", &ctx.artwork.artist),
        ("detail-year", &ctx.artwork.year),
        ("detail-medium", &ctx.artwork.medium),
    ] {
        if let Some(value) = value {
            body = body.push(field(ctx.i18n.tr(label_key), value));
        }
    }

    if let Some(description) = &ctx.artwork.description {
        body = body.push(Text::new(description.as_str()).size(typography::BODY));
    }

    let panel = Container::new(Scrollable::new(body))
        .width(Length::Fixed(sizing::DETAIL_PANEL_WIDTH))
        .max_height(600.0)
        .padding(spacing::MD)
        .style(styles::container::panel);

    Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .into()
}

fn field<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(Text::new(value).size(typography::BODY_LG))
        .into()
}
