//! # Account Card Widget
//!
//! One account with its payment card. Card number, CVV and account number are
//! masked unless the corresponding reveal is active.

use std::time::Instant;

use shared::{format_card_number, format_expiration, mask_account_number, mask_card_number, Account};

use crate::app::DashboardState;
use crate::ui::theme::Theme;

/// What the user clicked on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    ToggleAccountNumber,
    ToggleCardNumber,
    ToggleCvv,
}

/// Render the account card; returns the clicked action, if any
pub fn render_account_card(
    ui: &mut egui::Ui,
    account: &Account,
    dashboard: &DashboardState,
    now: Instant,
    theme: &Theme,
) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::group(ui.style())
        .fill(theme.colors.surface)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_min_width(360.0);

            ui.horizontal(|ui| {
                ui.colored_label(theme.dim, "Balance");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !account.status.is_empty() {
                        ui.colored_label(theme.dim, format!("[{}]", account.status));
                    }
                });
            });
            ui.label(
                egui::RichText::new(format!("{:.2} {}", account.balance, account.currency))
                    .size(28.0)
                    .strong(),
            );
            ui.add_space(8.0);

            let account_number = if dashboard.account_reveal.is_revealed(now) {
                account.account_number.clone()
            } else {
                mask_account_number(&account.account_number)
            };
            ui.horizontal(|ui| {
                ui.colored_label(theme.dim, "Account");
                if ui
                    .add(egui::Label::new(egui::RichText::new(account_number).monospace()).sense(egui::Sense::click()))
                    .on_hover_text("Click to show and copy")
                    .clicked()
                {
                    action = Some(CardAction::ToggleAccountNumber);
                }
            });

            ui.separator();

            let card_number = if dashboard.card_reveal.is_revealed(now) {
                format_card_number(&account.card.card_number)
            } else {
                mask_card_number(&account.card.card_number)
            };
            if ui
                .add(
                    egui::Label::new(egui::RichText::new(card_number).monospace().size(20.0))
                        .sense(egui::Sense::click()),
                )
                .on_hover_text("Click to show and copy")
                .clicked()
            {
                action = Some(CardAction::ToggleCardNumber);
            }

            ui.horizontal(|ui| {
                ui.colored_label(theme.dim, "Expires");
                ui.label(format_expiration(&account.card.expiration_date));
                ui.add_space(24.0);

                ui.colored_label(theme.dim, "CVV");
                let cvv = if dashboard.cvv_reveal.is_revealed(now) {
                    account.card.cvv.clone()
                } else {
                    "***".to_string()
                };
                if ui
                    .add(egui::Label::new(egui::RichText::new(cvv).monospace()).sense(egui::Sense::click()))
                    .on_hover_text("Click to show")
                    .clicked()
                {
                    action = Some(CardAction::ToggleCvv);
                }
            });
        });

    if action.is_some() {
        tracing::debug!(action = ?action, "Card interaction");
    }
    action
}
