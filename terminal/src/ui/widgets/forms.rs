//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Theme;

/// Default width of form inputs and buttons
pub const FORM_WIDTH: f32 = 300.0;

/// Render a labelled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        [FORM_WIDTH, 30.0],
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint),
    )
}

/// Render a primary button; disabled while `pending`
pub fn render_button(ui: &mut egui::Ui, text: &str, theme: &Theme, pending: bool) -> egui::Response {
    let label = if pending { format!("{}...", text) } else { text.to_string() };
    let button = egui::Button::new(egui::RichText::new(label).size(16.0).strong())
        .fill(theme.selected)
        .min_size(egui::vec2(FORM_WIDTH, 36.0));
    ui.add_enabled(!pending, button)
}

/// Render a secondary text link
pub fn render_link(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
    ui.add_enabled(enabled, egui::Link::new(text)).clicked()
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    let heading = egui::RichText::new(text)
        .size(26.0)
        .strong()
        .color(theme.selected);
    ui.label(heading);
    ui.add_space(16.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(14.0).color(theme.error));
    ui.add_space(8.0);
}

/// Render a success/info notice
pub fn render_notice(ui: &mut egui::Ui, notice: &str, theme: &Theme) {
    ui.label(egui::RichText::new(notice).size(14.0).color(theme.success));
    ui.add_space(8.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(13.0).color(theme.dim));
}

/// Whether Enter was pressed while `response`'s field had focus
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
