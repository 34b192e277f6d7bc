// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the displayed artwork (or bookend screen) with navigation
//! arrows, position indicator, detail button and detail panel layered on top.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::gallery::{Gallery, Message, Position};
use crate::i18n::fluent::I18n;
use crate::media::CachedImage;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use crate::ui::{bookends, detail_panel};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Container, Image, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Load state of the displayed artwork.
#[derive(Debug, Clone, Copy)]
pub enum ImageState<'a> {
    Loading,
    Ready(&'a CachedImage),
    Failed(&'a Error),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub catalog: &'a Catalog,
    pub image: ImageState<'a>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let surface = match ctx.gallery.displayed_position() {
        Position::Intro => bookends::intro(ctx.i18n),
        Position::Menu => bookends::menu(ctx.i18n, ctx.catalog),
        Position::Artwork(_) => artwork_surface(&ctx),
    };

    let wall = Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::wall);

    let mut stack = Stack::new()
        .push(wall)
        .push(arrows(&ctx))
        .push(footer(&ctx));

    if ctx.gallery.detail_visible() {
        let artwork = ctx
            .gallery
            .navigation()
            .item_index()
            .and_then(|item| ctx.catalog.get(item));
        if let Some(artwork) = artwork {
            stack = stack.push(detail_panel::view(detail_panel::ViewContext {
                i18n: ctx.i18n,
                artwork,
            }));
        }
    }

    stack.width(Length::Fill).height(Length::Fill).into()
}

fn artwork_surface<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.image {
        ImageState::Ready(image) => {
            let fit = ctx.gallery.fit_for(Some(image.size));
            if fit.is_degenerate() {
                placeholder(ctx.i18n.tr("image-loading"), false)
            } else {
                let alpha = if ctx.gallery.detail_visible() {
                    opacity::DIMMED
                } else {
                    opacity::OPAQUE
                };
                Image::new(image.handle.clone())
                    .width(Length::Fixed(fit.width))
                    .height(Length::Fixed(fit.height))
                    .opacity(alpha)
                    .into()
            }
        }
        ImageState::Loading => placeholder(ctx.i18n.tr("image-loading"), false),
        ImageState::Failed(error) => placeholder(ctx.i18n.tr(error.i18n_key()), true),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn placeholder<'a>(label: String, error: bool) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_LG))
        .padding(spacing::LG)
        .style(styles::container::placeholder(error))
        .into()
}

fn arrows<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navigation = ctx.gallery.navigation();
    let left = arrow(
        "◀",
        ctx.i18n.tr("nav-previous"),
        navigation.can_move_left().then_some(Message::NavigateLeft),
    );
    let right = arrow(
        "▶",
        ctx.i18n.tr("nav-next"),
        navigation.can_move_right().then_some(Message::NavigateRight),
    );

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(left)
            .push(Space::new().width(Length::Fill))
            .push(right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_y(Vertical::Center)
    .into()
}

/// An arrow button; `None` renders it disabled at a gallery bound.
fn arrow<'a>(glyph: &'a str, label: String, on_press: Option<Message>) -> Element<'a, Message> {
    let enabled = on_press.is_some();
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(glyph).size(typography::TITLE_LG))
        .push(Text::new(label).size(typography::CAPTION));

    let arrow = button(content).padding(spacing::SM).on_press_maybe(on_press);
    if enabled {
        arrow
            .style(styles::button_overlay(
                palette::WHITE,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_MEDIUM,
            ))
            .into()
    } else {
        arrow.style(styles::button_disabled()).into()
    }
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD).align_y(Vertical::Center);

    if let Position::Artwork(item) = ctx.gallery.displayed_position() {
        let current = (item + 1).to_string();
        let total = ctx.catalog.len().to_string();
        row = row.push(
            Text::new(ctx.i18n.tr_with_args(
                "position-indicator",
                &[("current", current.as_str()), ("total", total.as_str())],
            ))
            .size(typography::BODY)
            .color(palette::GRAY_200),
        );
    }

    row = row.push(Space::new().width(Length::Fill));

    let navigation = ctx.gallery.navigation();
    if navigation.has_detail() && !navigation.detail_visible() {
        row = row
            .push(
                Text::new(ctx.i18n.tr("detail-toggle-hint"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(
                button(Text::new(ctx.i18n.tr("detail-open")).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button_overlay(
                        palette::WHITE,
                        opacity::OVERLAY_SUBTLE,
                        opacity::OVERLAY_STRONG,
                    ))
                    .on_press(Message::ToggleDetail),
            );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_y(Vertical::Bottom)
        .into()
}
