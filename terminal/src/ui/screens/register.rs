//! # Registration Screen

use shared::RegisterRequest;
use crate::app::{App, AppState, Page};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render registration screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let form = &state.register;

    let mut first_name = form.first_name.clone();
    let mut last_name = form.last_name.clone();
    let mut email = form.email.clone();
    let mut password = form.password.clone();
    let mut phone_number = form.phone_number.clone();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        forms::render_form_heading(ui, "Create an account", &theme);

        forms::render_text_input(ui, "First name", &mut first_name, "Olena", false);
        ui.add_space(6.0);
        forms::render_text_input(ui, "Last name", &mut last_name, "Shevchenko", false);
        ui.add_space(6.0);
        forms::render_text_input(ui, "Email", &mut email, "you@example.com", false);
        ui.add_space(6.0);
        forms::render_text_input(ui, "Password", &mut password, "Password", true);
        ui.add_space(6.0);
        let phone_response = forms::render_text_input(ui, "Phone number", &mut phone_number, "+380501234567", false);
        let submit_by_enter = forms::submitted(ui, &phone_response);
        ui.add_space(12.0);

        if let Some(error) = &form.error {
            forms::render_error(ui, error, &theme);
        }

        {
            let mut state = app.state.write();
            let register = &mut state.register;
            register.first_name = first_name.clone();
            register.last_name = last_name.clone();
            register.email = email.clone();
            register.password = password.clone();
            register.phone_number = phone_number.clone();
        }

        if forms::render_button(ui, "Create account", &theme, form.pending).clicked() || (submit_by_enter && !form.pending) {
            app.handle_register_click(RegisterRequest {
                first_name,
                last_name,
                email,
                password,
                phone_number,
            });
        }

        ui.add_space(12.0);
        if forms::render_link(ui, "Already have an account? Sign in", !form.pending) {
            app.handle_navigate(Page::Login);
        }
    });
}
