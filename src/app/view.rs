// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: search bar over the results pane, the lightbox
//! (when an image is selected), then the toast overlay.

use super::update::RESULTS_SCROLLABLE_ID;
use super::Message;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_banner::ErrorBanner;
use crate::ui::components::pagination;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::image_cache::ImageCache;
use crate::ui::notifications::{self, Toast};
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{image_grid, modal, searchbar};
use iced::widget::{responsive, stack, Column, Container, Id, Scrollable, Text};
use iced::{alignment, Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub images: &'a ImageCache,
    pub notifications: &'a notifications::Manager,
    pub thumbnail_width: f32,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let search = searchbar::view(searchbar::ViewContext {
        i18n: ctx.i18n,
        query: ctx.gallery.query().as_str(),
        can_submit: ctx.gallery.can_submit(),
    })
    .map(Message::Search);

    let page: Element<'_, Message> = Column::new()
        .push(search)
        .push(results(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let with_lightbox = match ctx.gallery.lightbox() {
        Some(selection) => {
            let content = modal::content(modal::ViewContext {
                i18n: ctx.i18n,
                caption: &selection.caption,
                image: ctx.images.full_image(&selection.url),
                spinner_rotation: ctx.spinner_rotation,
            })
            .map(Message::Modal);
            modal::view(page, content, Message::Modal(modal::Message::Close))
        }
        None => page,
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![with_lightbox, toasts].into()
}

/// Results pane: error banner, or grid plus footer, or the empty hint.
fn results<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let gallery = ctx.gallery;

    if let Some(error) = gallery.error() {
        let mut banner = ErrorBanner::new(ctx.i18n.tr_with_args(error.i18n_key(), &error.i18n_args()));
        if matches!(error, gallery::GalleryError::NoResults { .. }) {
            banner = banner.hint(ctx.i18n.tr("error-no-results-hint"));
        }
        return banner.view();
    }

    if !gallery.shows_gallery() {
        if gallery.is_loading() {
            return centered(spinner(ctx.spinner_rotation));
        }
        return centered(
            Text::new(ctx.i18n.tr("gallery-empty-hint"))
                .size(typography::TITLE_MD)
                .into(),
        );
    }

    let i18n = ctx.i18n;
    let images = gallery.images();
    let cache = ctx.images;
    let thumbnail_width = ctx.thumbnail_width;
    let spinner_rotation = ctx.spinner_rotation;

    responsive(move |size: Size| {
        let columns = image_grid::column_count(
            size.width - 2.0 * spacing::MD,
            thumbnail_width,
            spacing::XS,
        );
        let grid = image_grid::view(
            &image_grid::ViewContext { images, cache },
            columns,
            size.width - 2.0 * spacing::MD,
        )
        .map(Message::Grid);

        let footer: Element<'a, Message> = if gallery.is_loading() {
            Container::new(spinner(spinner_rotation))
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .into()
        } else {
            pagination::view(gallery.pagination_control(), i18n, Message::LoadMore)
        };

        Scrollable::new(
            Column::new()
                .push(grid)
                .push(footer)
                .padding(spacing::MD)
                .width(Length::Fill),
        )
        .id(Id::new(RESULTS_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    })
    .into()
}

fn spinner<'a>(rotation: f32) -> Element<'a, Message> {
    AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
