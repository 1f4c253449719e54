//! # GUI Rendering
//!
//! Per-frame rendering on top of **egui**. Each frame clones a snapshot of
//! [`AppState`](crate::app::AppState) and hands it to the screen for the
//! current page; screens call back into [`App`] for every user action.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Instant;

use crate::app::{App, Page};
use crate::ui::widgets::notifications::NotificationManager;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    // Move queued notifications into toasts before taking the snapshot
    let queued = match app.state.try_write() {
        Some(mut state) => std::mem::take(&mut state.pending_notifications),
        None => Vec::new(),
    };
    notifications.push_all(queued);

    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        // Lock is held by another task, skip this frame
        None => {
            ctx.request_repaint();
            return;
        }
    };

    egui::CentralPanel::default().show(ctx, |ui| match &state.page {
        Page::Login => screens::login::render(ui, &state, app),
        Page::Register => screens::register::render(ui, &state, app),
        Page::Verify { email } => screens::verify::render(ui, &state, app, email),
        Page::Forgot => screens::forgot::render(ui, &state, app),
        Page::User => {
            egui::ScrollArea::vertical().show(ui, |ui| screens::dashboard::render(ui, &state, app));
        }
        Page::Admin => screens::admin::render(ui, &state, app),
    });

    notifications.show(ctx);

    // Wake up for reveal expiry, toast expiry and the reset redirect
    if let Some(delay) = state.next_deadline(Instant::now()) {
        ctx.request_repaint_after(delay);
    }
}
