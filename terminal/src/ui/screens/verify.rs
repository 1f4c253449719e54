//! # Email Verification Screen

use crate::app::{App, AppState, Page};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render verification screen for `email`
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, email: &str) {
    let theme = Theme::default();
    let form = &state.verify;
    let mut code = form.code.clone();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        forms::render_form_heading(ui, "Verify your email", &theme);
        forms::render_hint(ui, &format!("Enter the code sent to {}", email), &theme);
        ui.add_space(12.0);

        if let Some(info) = &form.info {
            forms::render_notice(ui, info, &theme);
        }

        let code_response = forms::render_text_input(ui, "Verification code", &mut code, "123456", false);
        let submit_by_enter = forms::submitted(ui, &code_response);
        ui.add_space(12.0);

        if let Some(error) = &form.error {
            forms::render_error(ui, error, &theme);
        }

        app.state.write().verify.code = code.clone();

        if forms::render_button(ui, "Verify", &theme, form.pending).clicked() || (submit_by_enter && !form.pending) {
            app.handle_verify_click(code.clone());
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.set_width(forms::FORM_WIDTH);
            if forms::render_link(ui, "Resend code", !form.pending) {
                app.handle_verify_resend_click();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if forms::render_link(ui, "Back to sign in", true) {
                    app.handle_navigate(Page::Login);
                }
            });
        });
    });
}
