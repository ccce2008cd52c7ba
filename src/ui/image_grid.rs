// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid.
//!
//! The grid is laid out in rows of equal-width tiles whose height follows
//! each preview's aspect ratio, so placeholders already have the size of
//! the thumbnail they stand in for. The column count is
//! derived from the available width by [`column_count`], so the caller wraps
//! the grid in `responsive` and passes the result in.

use crate::api::ImageRecord;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_cache::{ImageCache, Slot};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub images: &'a [ImageRecord],
    pub cache: &'a ImageCache,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A tile was clicked; carries the full-size URL and the caption.
    ThumbnailPressed { url: String, caption: String },
}

/// Number of columns that fit `available_width` with tiles at least
/// `tile_width` wide separated by `gap`. Always at least one.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn column_count(available_width: f32, tile_width: f32, gap: f32) -> usize {
    if !available_width.is_finite() || tile_width <= 0.0 {
        return 1;
    }
    // n tiles need n * tile + (n - 1) * gap
    let columns = ((available_width + gap) / (tile_width + gap)).floor();
    columns.max(1.0) as usize
}

/// Height of a tile for the given width and preview aspect ratio.
#[must_use]
pub fn tile_height(tile_width: f32, aspect_ratio: Option<f32>) -> f32 {
    let aspect = aspect_ratio
        .filter(|ratio| ratio.is_finite())
        .unwrap_or(sizing::TILE_ASPECT)
        .clamp(sizing::TILE_ASPECT_MIN, sizing::TILE_ASPECT_MAX);
    tile_width / aspect
}

/// Renders the grid with `columns` tiles per row. Tiles stretch to fill
/// `available_width`.
pub fn view<'a>(ctx: &ViewContext<'a>, columns: usize, available_width: f32) -> Element<'a, Message> {
    let columns = columns.max(1);
    #[allow(clippy::cast_precision_loss)]
    let tile_width = ((available_width - spacing::XS * (columns as f32 - 1.0)) / columns as f32)
        .max(1.0);
    let cache = ctx.cache;

    let rows = ctx.images.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::XS);
        for record in chunk {
            row = row.push(tile(record, cache, tile_width));
        }
        // Keep the last row's tiles the same width as full rows
        for _ in chunk.len()..columns {
            row = row.push(Container::new(Text::new("")).width(Length::Fill));
        }
        row.into()
    });

    Column::with_children(rows)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .into()
}

fn tile<'a>(record: &'a ImageRecord, cache: &'a ImageCache, width: f32) -> Element<'a, Message> {
    let height = tile_height(width, record.aspect_ratio());
    let content: Element<'a, Message> = match cache.thumbnail(record.id) {
        Slot::Ready(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        Slot::Loading => placeholder("", height),
        Slot::Failed => placeholder("×", height),
    };

    button(content)
        .on_press(Message::ThumbnailPressed {
            url: record.large_image_url.clone(),
            caption: record.caption(),
        })
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::tile)
        .into()
}

fn placeholder<'a>(label: &'a str, height: f32) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}
