// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery fills the window; a startup warning, when present, floats
//! above it until dismissed.

use super::Message;
use crate::catalog::Catalog;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::gallery_view::{self, ImageState};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub catalog: &'a Catalog,
    pub image: ImageState<'a>,
    /// i18n key of the pending startup warning.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = gallery_view::view(gallery_view::ViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        catalog: ctx.catalog,
        image: ctx.image,
    })
    .map(Message::Gallery);

    let Some(key) = ctx.notice else {
        return gallery;
    };

    let banner = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
        .push(
            button(Text::new(ctx.i18n.tr("notification-dismiss")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button_overlay(
                    palette::WHITE,
                    opacity::OVERLAY_SUBTLE,
                    opacity::OVERLAY_STRONG,
                ))
                .on_press(Message::DismissNotice),
        );

    let notice = Container::new(
        Container::new(banner)
            .max_width(sizing::NOTICE_MAX_WIDTH)
            .padding(spacing::SM)
            .style(styles::container::notice),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Top);

    Stack::new()
        .push(gallery)
        .push(notice)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
