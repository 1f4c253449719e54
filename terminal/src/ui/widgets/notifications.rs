//! # Notifications Widget
//!
//! Toast notification system using egui-notify for app-wide status messages
//! (account created, session problems).

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::Notification;
use crate::app::reveal::TOAST_DURATION;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        let toasts = Toasts::default().with_anchor(egui_notify::Anchor::BottomRight);

        Self { toasts }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn duration() -> Option<Duration> {
        Some(TOAST_DURATION)
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message).duration(Self::duration());
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message).duration(Self::duration());
    }

    /// Turn queued application notifications into toasts
    pub fn push_all(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            match notification {
                Notification::Success(message) => self.success(message),
                Notification::Error(message) => self.error(message),
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
