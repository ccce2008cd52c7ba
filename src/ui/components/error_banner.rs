// SPDX-License-Identifier: MPL-2.0
//! Inline error banner shown in place of the thumbnail grid.
//!
//! # Usage
//!
//! ```ignore
//! ErrorBanner::new(i18n.tr_with_args("error-no-results", &[("query", "cats")]))
//!     .hint(i18n.tr("error-no-results-hint"))
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Builder for the error banner.
#[derive(Debug, Clone, Default)]
pub struct ErrorBanner {
    message: String,
    hint: Option<String>,
}

impl ErrorBanner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    /// Adds a secondary line under the message.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let glyph = Text::new("!")
            .size(typography::TITLE_MD)
            .width(Length::Fixed(sizing::ICON_MD))
            .align_x(alignment::Horizontal::Center);

        let mut lines = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(self.message).size(typography::BODY_LG));

        if let Some(hint) = self.hint {
            lines = lines.push(Text::new(hint).size(typography::BODY).style(
                |theme: &Theme| text::Style {
                    color: Some(hint_color(theme)),
                },
            ));
        }

        let banner = Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(glyph)
                .push(lines),
        )
        .padding(spacing::MD)
        .max_width(sizing::SEARCH_INPUT_MAX_WIDTH * 1.5)
        .style(styles::container::error_banner);

        Container::new(banner)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

/// Muted gray for the hint line, so only the message itself carries the
/// banner's red text color.
fn hint_color(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    }
}
