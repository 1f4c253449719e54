//! # Table Components
//!
//! Grid tables for the dashboard's transaction and payment lists

use shared::{CustomerData, Payment, Transaction};

use crate::app::filters::{direction_of, Direction};
use crate::ui::theme::Theme;

/// Render a data table with headers and rows
pub fn render_table<F>(ui: &mut egui::Ui, id: &str, headers: &[&str], theme: &Theme, render_rows: F)
where
    F: FnOnce(&mut egui::Ui),
{
    egui::ScrollArea::vertical().id_salt(id).show(ui, |ui| {
        egui::Grid::new(id)
            .num_columns(headers.len())
            .spacing([16.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for header in headers {
                    ui.colored_label(theme.selected, *header);
                }
                ui.end_row();

                render_rows(ui);
            });
    });
}

/// Render an empty state message
pub fn render_empty_state(ui: &mut egui::Ui, primary_text: &str, secondary_text: Option<&str>, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}

/// Transactions, already filtered and sorted
pub fn render_transactions(ui: &mut egui::Ui, transactions: &[Transaction], owner: &CustomerData, theme: &Theme) {
    if transactions.is_empty() {
        render_empty_state(ui, "No transactions", Some("Try clearing the filters"), theme);
        return;
    }

    render_table(
        ui,
        "transactions_table",
        &["Date", "Counterparty", "Description", "Amount", "Status"],
        theme,
        |ui| {
            for tx in transactions {
                let outgoing = direction_of(tx, owner) == Direction::Sent;
                let counterparty = if outgoing { &tx.receiver } else { &tx.sender };

                let date = tx
                    .occurred_at()
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| tx.transaction_date.clone());
                ui.label(date);
                ui.label(format!("{} {}", counterparty.first_name, counterparty.last_name));
                ui.label(&tx.description);
                let (amount, color) = theme.format_amount(tx.amount, &tx.currency_code, outgoing);
                ui.colored_label(color, amount);
                ui.colored_label(theme.dim, &tx.status);
                ui.end_row();
            }
        },
    );
}

pub fn render_payments(ui: &mut egui::Ui, payments: &[Payment], theme: &Theme) {
    if payments.is_empty() {
        render_empty_state(ui, "No payments", None, theme);
        return;
    }

    render_table(ui, "payments_table", &["Beneficiary", "Purpose", "Amount"], theme, |ui| {
        for payment in payments {
            ui.label(&payment.beneficiary_name);
            ui.label(&payment.purpose);
            ui.label(format!("{} {}", payment.amount, payment.currency));
            ui.end_row();
        }
    });
}
