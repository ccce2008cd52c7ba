// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery state, the HTTP client, the
//! image cache, localization and notifications, and translates messages
//! into gallery transitions and background tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{ApiSettings, Client};
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::ui::image_cache::ImageCache;
use crate::ui::notifications::{self, Notification};
use crate::ui::searchbar;
use crate::ui::theming::ThemeMode;
use iced::widget::{operation, Id};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    /// `None` when the HTTP client could not be built; searches then fail
    /// with the generic error banner.
    client: Option<Client>,
    images: ImageCache,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    thumbnail_width: f32,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.gallery.query().as_str())
            .field("images", &self.gallery.images().len())
            .field("page", &self.gallery.page())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 520.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::default(),
            client: None,
            images: ImageCache::default(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            thumbnail_width: config::DEFAULT_THUMBNAIL_WIDTH,
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Loads config and localization, builds the HTTP client and submits
    /// the startup query if one was given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: &config::Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), config);

        let mut app = App {
            i18n,
            gallery: gallery::State::new(config.per_page()),
            images: ImageCache::new(config.full_image_cache_size()),
            theme_mode: config.general.theme_mode,
            thumbnail_width: config.thumbnail_width(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let settings = ApiSettings::from_config(config, flags.api_key);
        if !settings.has_key() {
            app.notifications
                .push(Notification::warning("notification-missing-api-key"));
        }
        app.client = match Client::new(settings) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(error = %err, "failed to build HTTP client");
                app.notifications
                    .push(Notification::error("notification-client-error"));
                None
            }
        };

        let search = match flags.query {
            Some(query) => {
                app.gallery.input_changed(&query);
                let effect = app.gallery.submit();
                update::run_effect(&mut app.update_context(), effect)
            }
            None => Task::none(),
        };
        let focus = operation::focus(Id::new(searchbar::INPUT_ID));

        (app, Task::batch([focus, search]))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let term = self.gallery.query().term();
        if term.is_empty() {
            app_name
        } else {
            format!("{term} - {app_name}")
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        let modal_sub = subscription::create_modal_subscription(self.gallery.is_modal_open());
        let tick_sub = subscription::create_tick_subscription(
            update::is_animating(&self.gallery, &self.images),
            self.notifications.has_notifications(),
        );

        Subscription::batch([modal_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            client: self.client.as_ref(),
            images: &mut self.images,
            notifications: &mut self.notifications,
            spinner_rotation: &mut self.spinner_rotation,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Search(search_message) => update::handle_search_message(&mut ctx, search_message),
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::LoadMore => update::handle_load_more(&mut ctx),
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SearchCompleted { request, result } => {
                update::handle_search_completed(&mut ctx, &request, result)
            }
            Message::ThumbnailLoaded { id, result } => {
                update::handle_thumbnail_loaded(&mut ctx, id, result);
                Task::none()
            }
            Message::FullImageLoaded { url, result } => {
                update::handle_full_image_loaded(&mut ctx, url, result);
                Task::none()
            }
            Message::Tick(_instant) => {
                update::handle_tick(&mut ctx);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            images: &self.images,
            notifications: &self.notifications,
            thumbnail_width: self.thumbnail_width,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::record::sample;
    use crate::error::Error;
    use crate::gallery::{FetchOrigin, FetchRequest, PaginationControl};
    use crate::ui::{image_grid, modal};

    fn app_with(config: &config::Config, flags: Flags) -> App {
        let (app, _task) = App::with_config(
            Flags {
                api_key: Some("test-key".into()),
                ..flags
            },
            config,
            None,
        );
        app
    }

    fn type_and_submit(app: &mut App, query: &str) -> FetchRequest {
        let _ = app.update(Message::Search(searchbar::Message::InputChanged(
            query.to_string(),
        )));
        let _ = app.update(Message::Search(searchbar::Message::Submit));
        app.gallery
            .in_flight()
            .cloned()
            .expect("submit should start a fetch")
    }

    fn complete(app: &mut App, request: FetchRequest, count: u64) {
        let records = (0..count).map(|i| sample(u64::from(request.page) * 100 + i)).collect();
        let _ = app.update(Message::SearchCompleted {
            request,
            result: Ok(records),
        });
    }

    #[test]
    fn startup_is_idle_with_config_defaults() {
        let app = app_with(&config::Config::default(), Flags::default());
        assert!(app.gallery.images().is_empty());
        assert!(!app.gallery.is_loading());
        assert!(app.client.is_some());
        assert_eq!(app.thumbnail_width, config::DEFAULT_THUMBNAIL_WIDTH);
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn startup_query_submits_immediately() {
        let app = app_with(
            &config::Config::default(),
            Flags {
                query: Some("Cats".into()),
                ..Flags::default()
            },
        );
        assert_eq!(app.gallery.query().as_str(), "cats");
        assert!(app.gallery.is_loading());
        assert_eq!(app.gallery.in_flight().map(|r| r.page), Some(1));
    }

    #[test]
    fn startup_applies_config_values() {
        let config: config::Config = toml::from_str(
            "[api]\nper_page = 20\n\n[gallery]\nthumbnail_width = 300.0\n",
        )
        .expect("valid config");

        let app = app_with(&config, Flags::default());
        assert_eq!(app.thumbnail_width, 300.0);
        assert_eq!(app.client.as_ref().map(|c| c.settings().per_page), Some(20));
    }

    #[test]
    fn config_warning_becomes_toast() {
        let (app, _task) = App::with_config(
            Flags {
                api_key: Some("test-key".into()),
                ..Flags::default()
            },
            &config::Config::default(),
            Some("notification-config-load-error".into()),
        );
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-config-load-error"));
    }

    #[test]
    fn title_includes_query() {
        let mut app = App::default();
        let plain = app.title();
        let _ = app.update(Message::Search(searchbar::Message::InputChanged(
            "Sunset".into(),
        )));
        assert_eq!(app.title(), format!("sunset - {plain}"));
    }

    #[test]
    fn search_then_load_more_session() {
        let mut app = App::default();
        let request = type_and_submit(&mut app, "cats");
        complete(&mut app, request, 12);

        assert_eq!(app.gallery.images().len(), 12);
        assert_eq!(app.gallery.pagination_control(), PaginationControl::LoadMore);

        let _ = app.update(Message::LoadMore);
        let request = app.gallery.in_flight().cloned().expect("load more fetch");
        assert_eq!(request.origin, FetchOrigin::LoadMore);
        assert_eq!(request.page, 2);

        complete(&mut app, request, 5);
        assert_eq!(app.gallery.images().len(), 17);
        assert_eq!(app.gallery.page(), 3);
        assert_eq!(app.gallery.pagination_control(), PaginationControl::End);
    }

    #[test]
    fn failure_shows_banner_and_hides_grid() {
        let mut app = App::default();
        let request = type_and_submit(&mut app, "cats");
        let _ = app.update(Message::SearchCompleted {
            request,
            result: Err(Error::Http(500)),
        });

        assert!(app.gallery.error().is_some());
        assert!(!app.gallery.shows_gallery());
    }

    #[test]
    fn stale_response_does_not_leak_into_new_query() {
        let mut app = App::default();
        let old = type_and_submit(&mut app, "cats");
        let new = type_and_submit(&mut app, "dogs");

        complete(&mut app, old, 12);
        assert!(app.gallery.images().is_empty());

        complete(&mut app, new, 4);
        assert_eq!(app.gallery.images().len(), 4);
    }

    #[test]
    fn lightbox_opens_and_closes() {
        let mut app = App::default();
        let _ = app.update(Message::Grid(image_grid::Message::ThumbnailPressed {
            url: "https://a/large.jpg".into(),
            caption: "cat".into(),
        }));
        assert!(app.gallery.is_modal_open());

        let _ = app.update(Message::Modal(modal::Message::Close));
        assert!(!app.gallery.is_modal_open());
    }

    #[test]
    fn escape_closes_lightbox_and_ends_listener() {
        let mut app = App::default();
        let _ = app.update(Message::Grid(image_grid::Message::ThumbnailPressed {
            url: "https://a/large.jpg".into(),
            caption: "cat".into(),
        }));
        assert!(app.gallery.is_modal_open());

        let escape = subscription::modal_key_message(&iced::keyboard::Key::Named(
            iced::keyboard::key::Named::Escape,
        ))
        .expect("escape maps to a message");
        let _ = app.update(escape);

        // The Escape listener is only subscribed while this is true
        assert!(!app.gallery.is_modal_open());
        assert!(app.gallery.lightbox().is_none());
    }

    #[test]
    fn close_while_closed_is_harmless() {
        let mut app = App::default();
        let request = type_and_submit(&mut app, "cats");
        complete(&mut app, request, 12);

        let _ = app.update(Message::Modal(modal::Message::Close));
        let _ = app.update(Message::Modal(modal::Message::Close));

        assert!(!app.gallery.is_modal_open());
        assert!(app.gallery.lightbox().is_none());
        assert_eq!(app.gallery.images().len(), 12);
        assert_eq!(app.gallery.page(), 2);
        assert_eq!(app.gallery.pagination_control(), PaginationControl::LoadMore);
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn full_image_result_is_cached() {
        let mut app = App::default();
        let _ = app.update(Message::FullImageLoaded {
            url: "https://a/large.jpg".into(),
            result: Ok(iced::widget::image::Handle::from_bytes(vec![1_u8, 2, 3])),
        });
        assert_eq!(app.images.full_count(), 1);
    }

    #[test]
    fn view_renders_every_state() {
        let mut app = App::default();
        let _ = app.view();

        let request = type_and_submit(&mut app, "cats");
        let _ = app.view();

        complete(&mut app, request, 3);
        let _ = app.update(Message::Grid(image_grid::Message::ThumbnailPressed {
            url: "https://a/large.jpg".into(),
            caption: "cat".into(),
        }));
        let _ = app.view();
    }
}
