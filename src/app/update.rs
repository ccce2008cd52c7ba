// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Gallery reducers return an [`Effect`]; [`run_effect`] turns it into Iced
//! tasks (HTTP requests, image downloads, scrolling) and toasts.

use super::Message;
use crate::api::{image_loader, Client, ImageRecord};
use crate::error::Error;
use crate::gallery::{self, Effect, FetchRequest};
use crate::ui::image_cache::{ImageCache, Slot};
use crate::ui::notifications::{self, Notification};
use crate::ui::widgets::animated_spinner;
use crate::ui::{image_grid, modal, searchbar};
use iced::widget::image::Handle;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Identifier of the scrollable holding the grid.
pub const RESULTS_SCROLLABLE_ID: &str = "gallery-results-scrollable";

pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub client: Option<&'a Client>,
    pub images: &'a mut ImageCache,
    pub notifications: &'a mut notifications::Manager,
    pub spinner_rotation: &'a mut f32,
}

pub fn handle_search_message(ctx: &mut UpdateContext<'_>, message: searchbar::Message) -> Task<Message> {
    let effect = match message {
        searchbar::Message::InputChanged(text) => ctx.gallery.input_changed(&text),
        searchbar::Message::Submit => ctx.gallery.submit(),
    };
    run_effect(ctx, effect)
}

pub fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: image_grid::Message) -> Task<Message> {
    match message {
        image_grid::Message::ThumbnailPressed { url, caption } => {
            let effect = ctx.gallery.open_modal(url, caption);
            run_effect(ctx, effect)
        }
    }
}

pub fn handle_load_more(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let effect = ctx.gallery.load_more();
    run_effect(ctx, effect)
}

pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    match message {
        modal::Message::Close => {
            let effect = ctx.gallery.close_modal();
            run_effect(ctx, effect)
        }
    }
}

pub fn handle_search_completed(
    ctx: &mut UpdateContext<'_>,
    request: &FetchRequest,
    result: Result<Vec<ImageRecord>, Error>,
) -> Task<Message> {
    let effect = ctx.gallery.fetch_completed(request, result);
    run_effect(ctx, effect)
}

pub fn handle_thumbnail_loaded(ctx: &mut UpdateContext<'_>, id: u64, result: Result<Handle, Error>) {
    let handle = result
        .inspect_err(|err| tracing::debug!(id, error = %err, "thumbnail download failed"))
        .ok();
    ctx.images.thumbnail_loaded(id, handle);
}

pub fn handle_full_image_loaded(ctx: &mut UpdateContext<'_>, url: String, result: Result<Handle, Error>) {
    let handle = result
        .inspect_err(|err| tracing::warn!(%url, error = %err, "full image download failed"))
        .ok();
    ctx.images.full_loaded(url, handle);
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) {
    ctx.notifications.tick();
    if is_animating(ctx.gallery, ctx.images) {
        *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
    }
}

/// Returns whether a spinner is on screen.
pub fn is_animating(gallery: &gallery::State, images: &ImageCache) -> bool {
    gallery.is_loading()
        || gallery
            .lightbox()
            .is_some_and(|selection| matches!(images.full_image(&selection.url), Slot::Loading))
}

/// Performs the side effect requested by a gallery transition.
pub fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::WarnEmptyQuery => {
            ctx.notifications
                .push(Notification::warning("notification-empty-query"));
            Task::none()
        }
        Effect::Fetch(request) => {
            ctx.notifications.clear_key("notification-empty-query");
            search_task(ctx.client, request)
        }
        Effect::ResultsCleared => {
            ctx.images.clear_thumbnails();
            Task::none()
        }
        Effect::PageAppended {
            range,
            scroll_to_bottom,
        } => {
            let appended = ctx.gallery.images().get(range).unwrap_or_default();
            let downloads = ctx.images.request_thumbnails(appended);
            let mut tasks: Vec<Task<Message>> = Vec::with_capacity(downloads.len() + 1);

            if let Some(client) = ctx.client {
                tasks.extend(downloads.into_iter().map(|(id, url)| {
                    Task::perform(image_loader::load(client.clone(), url), move |result| {
                        Message::ThumbnailLoaded { id, result }
                    })
                }));
            }

            if scroll_to_bottom {
                tasks.push(operation::snap_to(
                    Id::new(RESULTS_SCROLLABLE_ID),
                    RelativeOffset::END,
                ));
            }

            Task::batch(tasks)
        }
        Effect::LoadFullImage(url) => {
            let Some(client) = ctx.client.cloned() else {
                return Task::none();
            };
            if !ctx.images.request_full(&url) {
                return Task::none();
            }
            Task::perform(image_loader::load(client, url.clone()), move |result| {
                Message::FullImageLoaded { url, result }
            })
        }
    }
}

fn search_task(client: Option<&Client>, request: FetchRequest) -> Task<Message> {
    let Some(client) = client.cloned() else {
        return Task::done(Message::SearchCompleted {
            request,
            result: Err(Error::Config("HTTP client unavailable".to_string())),
        });
    };

    let query = request.query.clone();
    let page = request.page;
    Task::perform(
        async move { client.search(&query, page).await },
        move |result| Message::SearchCompleted { request, result },
    )
}
