//! # Administrator Screen
//!
//! Landing panel for administrator roles. Administrators have no customer
//! document, so nothing is fetched here.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, _state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Administration").size(22.0).strong().color(theme.selected));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Log out").clicked() {
                app.handle_logout();
            }
        });
    });
    ui.separator();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(egui::RichText::new("Welcome, administrator").size(26.0).strong());
        ui.add_space(8.0);
        forms::render_hint(ui, "You are signed in with administrator rights.", &theme);
    });
}
