// SPDX-License-Identifier: MPL-2.0
//! Search bar across the top of the window.
//!
//! Stateless: the text shown is the gallery's normalized query, and every
//! keystroke is reported upward.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Id, Row, Text};
use iced::{alignment, Element, Length};

/// Identifier of the search field, focused at startup.
pub const INPUT_ID: &str = "gallery-search-input";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a str,
    /// False while a page is loading.
    pub can_submit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    InputChanged(String),
    Submit,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("search-placeholder"), ctx.query)
        .id(Id::new(INPUT_ID))
        .on_input(Message::InputChanged)
        .on_submit_maybe(ctx.can_submit.then_some(Message::Submit))
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill);

    let submit = button(Text::new(ctx.i18n.tr("search-button")).size(typography::BODY))
        .on_press_maybe(ctx.can_submit.then_some(Message::Submit))
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button_primary);

    let form = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(submit);

    Container::new(Container::new(form).max_width(sizing::SEARCH_INPUT_MAX_WIDTH))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SEARCHBAR_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, spacing::LG])
        .style(styles::container::searchbar)
        .into()
}
