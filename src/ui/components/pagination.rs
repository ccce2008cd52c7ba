// SPDX-License-Identifier: MPL-2.0
//! Control rendered below the thumbnail grid.

use crate::gallery::PaginationControl;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Space, Text};
use iced::{alignment, Element, Length};

/// Renders `control`; `on_load_more` is emitted by the load-more button.
/// The "End" button is shown disabled.
pub fn view<'a, Message: Clone + 'a>(
    control: PaginationControl,
    i18n: &I18n,
    on_load_more: Message,
) -> Element<'a, Message> {
    let (label, on_press) = match control {
        PaginationControl::Hidden => return Space::new().into(),
        PaginationControl::LoadMore => (i18n.tr("load-more-button"), Some(on_load_more)),
        PaginationControl::End => (i18n.tr("end-button"), None),
    };

    let button = button(
        Text::new(label)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press_maybe(on_press)
    .width(Length::Fixed(sizing::LOAD_MORE_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button_primary);

    Container::new(button)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into()
}
