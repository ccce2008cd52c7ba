// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications appear temporarily in the bottom-right corner without
//! blocking interaction. The gallery uses them for the empty-query prompt
//! and for configuration problems found at startup.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-empty-query"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Durations: 5s for warnings, manual dismiss for errors. At most 3 toasts
//! are visible; the rest are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
