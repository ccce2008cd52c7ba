// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay.
//!
//! [`view`] stacks a dimmed backdrop and the lightbox content on top of an
//! explicit host element. Clicks on the backdrop emit the close message;
//! clicks on the content are absorbed by an `opaque` layer so they never
//! reach the backdrop or the host underneath.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::image_cache::Slot;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::Image;
use iced::widget::{button, center, mouse_area, opaque, stack, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Close,
}

/// Data shown inside the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub caption: &'a str,
    pub image: Slot<'a>,
    pub spinner_rotation: f32,
}

/// Layers `content` over `host` with a backdrop that emits `on_close` when
/// clicked outside the content.
pub fn view<'a, M: Clone + 'a>(
    host: impl Into<Element<'a, M>>,
    content: impl Into<Element<'a, M>>,
    on_close: M,
) -> Element<'a, M> {
    stack![
        host.into(),
        opaque(
            mouse_area(
                center(opaque(content))
                    .padding(spacing::XL)
                    .style(styles::overlay::backdrop)
            )
            .on_press(on_close)
        )
    ]
    .into()
}

/// Builds the lightbox body: close button, full-size image and caption.
pub fn content<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new(ctx.i18n.tr("modal-close")).size(typography::BODY))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ));

    let body: Element<'a, Message> = match ctx.image {
        Slot::Ready(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into(),
        Slot::Loading => AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element(),
        Slot::Failed => Text::new(ctx.i18n.tr("modal-load-error"))
            .size(typography::BODY_LG)
            .color(palette::ERROR_500)
            .into(),
    };

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right)
        .push(close)
        .push(Container::new(body).padding(spacing::XS));

    if !ctx.caption.is_empty() {
        column = column.push(
            Container::new(Text::new(ctx.caption).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::caption),
        );
    }

    Container::new(column)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .padding(spacing::SM)
        .into()
}
