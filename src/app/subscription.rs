// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::modal;
use iced::keyboard::{self, key};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Listens for Escape while the lightbox is open.
///
/// The subscription only exists while `modal_open` is true, so the listener
/// is torn down by the runtime as soon as the modal closes.
pub fn create_modal_subscription(modal_open: bool) -> Subscription<Message> {
    if !modal_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| modal_event_message(&event))
}

/// Maps a runtime event to the lightbox message it triggers, if any.
pub fn modal_event_message(event: &Event) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => modal_key_message(key),
        _ => None,
    }
}

/// Escape closes the lightbox; every other key is left to the widgets.
pub fn modal_key_message(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::Escape) => Some(Message::Modal(modal::Message::Close)),
        _ => None,
    }
}

/// Creates a periodic tick for the spinner and notification auto-dismiss.
pub fn create_tick_subscription(is_animating: bool, has_notifications: bool) -> Subscription<Message> {
    if is_animating || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
