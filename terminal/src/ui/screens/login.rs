//! # Login Screen

use crate::app::{App, AppState, Page};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render login screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let form = &state.login;

    // Local mutable copies for text inputs
    let mut email = form.email.clone();
    let mut password = form.password.clone();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        forms::render_form_heading(ui, "Sign in", &theme);

        if let Some(notice) = &form.notice {
            forms::render_notice(ui, notice, &theme);
        }

        forms::render_text_input(ui, "Email", &mut email, "you@example.com", false);
        ui.add_space(8.0);
        let password_response = forms::render_text_input(ui, "Password", &mut password, "Password", true);
        let submit_by_enter = forms::submitted(ui, &password_response);
        ui.add_space(12.0);

        if let Some(error) = &form.error {
            forms::render_error(ui, error, &theme);
        }

        // Update state if changed
        {
            let mut state = app.state.write();
            state.login.email = email.clone();
            state.login.password = password.clone();
        }

        if forms::render_button(ui, "Sign in", &theme, form.pending).clicked() || (submit_by_enter && !form.pending) {
            app.handle_login_click(email.clone(), password.clone());
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.set_width(forms::FORM_WIDTH);
            if forms::render_link(ui, "Create an account", !form.pending) {
                app.handle_navigate(Page::Register);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if forms::render_link(ui, "Forgot password?", !form.pending) {
                    app.handle_navigate(Page::Forgot);
                }
            });
        });
    });
}
