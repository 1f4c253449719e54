//! # Password Reset Screen
//!
//! Three-step wizard: request a code, verify it, choose a new password.

use crate::app::{App, AppState, Page, ResetStep, ResetWizard};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render password reset wizard
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let wizard = &state.reset;

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        forms::render_form_heading(ui, "Reset password", &theme);
        forms::render_hint(ui, &format!("Step {} of 3", wizard.step.number()), &theme);
        ui.add_space(12.0);

        if let Some(info) = &wizard.info {
            forms::render_notice(ui, info, &theme);
        }

        match wizard.step {
            ResetStep::RequestCode => render_request_code(ui, wizard, app, &theme),
            ResetStep::VerifyCode => render_verify_code(ui, wizard, app, &theme),
            ResetStep::NewPassword => render_new_password(ui, wizard, app, &theme),
            ResetStep::Done => {
                ui.spinner();
                forms::render_hint(ui, "Returning to sign in...", &theme);
            }
        }

        if let Some(error) = &wizard.error {
            ui.add_space(8.0);
            forms::render_error(ui, error, &theme);
        }

        ui.add_space(12.0);
        if forms::render_link(ui, "Back to sign in", true) {
            app.handle_navigate(Page::Login);
        }
    });
}

fn render_request_code(ui: &mut egui::Ui, wizard: &ResetWizard, app: &mut App, theme: &Theme) {
    let mut email = wizard.email.clone();
    let response = forms::render_text_input(ui, "Email", &mut email, "you@example.com", false);
    let submit_by_enter = forms::submitted(ui, &response);
    ui.add_space(12.0);

    app.state.write().reset.email = email.clone();

    if forms::render_button(ui, "Send code", theme, wizard.pending).clicked() || (submit_by_enter && !wizard.pending) {
        app.handle_reset_request_code(email);
    }
}

fn render_verify_code(ui: &mut egui::Ui, wizard: &ResetWizard, app: &mut App, theme: &Theme) {
    let mut code = wizard.code.clone();
    let response = forms::render_text_input(ui, "Verification code", &mut code, "123456", false);
    let submit_by_enter = forms::submitted(ui, &response);
    ui.add_space(12.0);

    app.state.write().reset.code = code.clone();

    if forms::render_button(ui, "Verify code", theme, wizard.pending).clicked() || (submit_by_enter && !wizard.pending) {
        app.handle_reset_check_code(code);
    }
    ui.add_space(8.0);
    if forms::render_link(ui, "Resend code", !wizard.pending) {
        app.handle_reset_resend_code();
    }
}

fn render_new_password(ui: &mut egui::Ui, wizard: &ResetWizard, app: &mut App, theme: &Theme) {
    let mut new_password = wizard.new_password.clone();
    let mut confirm_password = wizard.confirm_password.clone();

    forms::render_text_input(ui, "New password", &mut new_password, "New password", true);
    ui.add_space(6.0);
    let response = forms::render_text_input(ui, "Confirm password", &mut confirm_password, "Repeat password", true);
    let submit_by_enter = forms::submitted(ui, &response);
    ui.add_space(12.0);

    {
        let mut state = app.state.write();
        state.reset.new_password = new_password.clone();
        state.reset.confirm_password = confirm_password.clone();
    }

    if forms::render_button(ui, "Change password", theme, wizard.pending).clicked() || (submit_by_enter && !wizard.pending) {
        app.handle_reset_submit(new_password, confirm_password);
    }
}
