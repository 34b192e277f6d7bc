// SPDX-License-Identifier: MPL-2.0
//! Intro and menu screens framing the artworks in the bookend layout.

use crate::catalog::Catalog;
use crate::gallery::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Scrollable, Text};
use iced::{Element, Length};

/// First gallery position.
pub fn intro<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("intro-title")).size(typography::DISPLAY))
        .push(Text::new(i18n.tr("intro-subtitle")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr("intro-hint"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    centered(content)
}

/// Last gallery position: every artwork title, in walking order.
pub fn menu<'a>(i18n: &I18n, catalog: &'a Catalog) -> Element<'a, Message> {
    let titles = catalog.iter().enumerate().fold(
        Column::new().spacing(spacing::XS).align_x(Horizontal::Center),
        |column, (position, artwork)| {
            let line = match &artwork.artist {
                Some(artist) => format!("{}. {} · {artist}", position + 1, artwork.title),
                None => format!("{}. {}", position + 1, artwork.title),
            };
            column.push(Text::new(line).size(typography::BODY_LG))
        },
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("menu-title")).size(typography::TITLE_LG))
        .push(Scrollable::new(titles).height(Length::Shrink))
        .push(
            Text::new(i18n.tr("menu-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    centered(content)
}

fn centered<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
