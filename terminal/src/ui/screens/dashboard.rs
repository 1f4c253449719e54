//! # Dashboard Screen
//!
//! Customer overview: accounts and cards, filtered transactions, payments,
//! profile panel and the "add account" modal.

use std::time::Instant;

use shared::{initials, last_four, AccountType, CustomerData};

use crate::app::filters::{filter_transactions, Direction};
use crate::app::{App, AppState, DashboardState, DashboardTab};
use crate::ui::theme::Theme;
use crate::ui::widgets::account_card::{self, CardAction};
use crate::ui::widgets::{forms, tables};

/// Render dashboard screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let dashboard = &state.dashboard;
    let now = Instant::now();

    render_header(ui, dashboard, app, &theme);
    ui.separator();

    let Some(customer) = &dashboard.customer else {
        render_unloaded(ui, dashboard, app, &theme);
        return;
    };

    if let Some(error) = &dashboard.error {
        // Stale data stays on screen when a refresh fails
        ui.horizontal(|ui| {
            forms::render_error(ui, error, &theme);
            if ui.add_enabled(!dashboard.loading, egui::Button::new("Retry")).clicked() {
                app.handle_dashboard_load();
            }
        });
    }

    render_account_selector(ui, customer, dashboard, app);
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for tab in DashboardTab::all() {
            if ui.selectable_label(dashboard.tab == *tab, tab.title()).clicked() {
                app.handle_tab_change(*tab);
            }
        }
    });
    ui.separator();

    match dashboard.tab {
        DashboardTab::Accounts => render_accounts_tab(ui, dashboard, app, now, &theme),
        DashboardTab::Transactions => render_transactions_tab(ui, customer, dashboard, app, &theme),
        DashboardTab::Payments => match dashboard.selected() {
            Some(account) => tables::render_payments(ui, &account.payments, &theme),
            None => tables::render_empty_state(ui, "No accounts yet", None, &theme),
        },
        DashboardTab::Transfers => {
            tables::render_empty_state(ui, "Transfers are not available yet", None, &theme);
        }
    }

    if dashboard.show_profile {
        render_profile(ui.ctx(), customer, app, &theme);
    }
    if dashboard.add_account.open {
        render_add_account_modal(ui.ctx(), dashboard, app, &theme);
    }
    if let Some(message) = dashboard.toast.current(now) {
        render_toast(ui.ctx(), message, &theme);
    }
}

fn render_header(ui: &mut egui::Ui, dashboard: &DashboardState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        let greeting = match &dashboard.customer {
            Some(customer) => format!("Hello, {}", customer.first_name),
            None => "Dashboard".to_string(),
        };
        ui.label(egui::RichText::new(greeting).size(22.0).strong().color(theme.selected));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Log out").clicked() {
                app.handle_logout();
            }
            if let Some(customer) = &dashboard.customer {
                let badge = initials(&customer.first_name, &customer.last_name);
                if ui
                    .selectable_label(dashboard.show_profile, badge)
                    .on_hover_text("Profile")
                    .clicked()
                {
                    app.handle_profile_toggle();
                }
            }
        });
    });
}

/// Loading spinner, or the fetch error with a retry button
fn render_unloaded(ui: &mut egui::Ui, dashboard: &DashboardState, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        if dashboard.loading {
            ui.spinner();
            forms::render_hint(ui, "Loading your accounts...", theme);
            return;
        }

        if let Some(error) = &dashboard.error {
            forms::render_error(ui, error, theme);
        }
        if ui.button("Retry").clicked() {
            app.handle_dashboard_load();
        }
    });
}

fn render_account_selector(ui: &mut egui::Ui, customer: &CustomerData, dashboard: &DashboardState, app: &mut App) {
    ui.horizontal(|ui| {
        if let Some(selected) = dashboard.selected() {
            let mut index = dashboard.selected_account.min(customer.accounts.len().saturating_sub(1));
            egui::ComboBox::from_id_salt("account_selector")
                .selected_text(format!("{} •••• {}", selected.currency, last_four(&selected.account_number)))
                .show_ui(ui, |ui| {
                    for (i, account) in customer.accounts.iter().enumerate() {
                        let label = format!("{} •••• {}", account.currency, last_four(&account.account_number));
                        ui.selectable_value(&mut index, i, label);
                    }
                });
            if index != dashboard.selected_account {
                app.handle_account_select(index);
            }
        }

        if ui.button("+ Add account").clicked() {
            app.handle_add_account_open();
        }
    });
}

fn render_accounts_tab(ui: &mut egui::Ui, dashboard: &DashboardState, app: &mut App, now: Instant, theme: &Theme) {
    let Some(account) = dashboard.selected() else {
        tables::render_empty_state(ui, "No accounts yet", Some("Open one with \"Add account\""), theme);
        return;
    };

    let copied = match account_card::render_account_card(ui, account, dashboard, now, theme) {
        Some(CardAction::ToggleCardNumber) => app.handle_card_number_toggle(),
        Some(CardAction::ToggleAccountNumber) => app.handle_account_number_toggle(),
        Some(CardAction::ToggleCvv) => {
            app.handle_cvv_toggle();
            None
        }
        None => None,
    };
    if let Some(text) = copied {
        ui.ctx().copy_text(text);
    }
}

fn render_transactions_tab(
    ui: &mut egui::Ui,
    customer: &CustomerData,
    dashboard: &DashboardState,
    app: &mut App,
    theme: &Theme,
) {
    let Some(account) = dashboard.selected() else {
        tables::render_empty_state(ui, "No accounts yet", None, theme);
        return;
    };

    let mut filter = dashboard.filter.clone();
    ui.horizontal(|ui| {
        ui.label("From");
        ui.add(egui::TextEdit::singleline(&mut filter.start_date).hint_text("YYYY-MM-DD").desired_width(100.0));
        ui.label("To");
        ui.add(egui::TextEdit::singleline(&mut filter.end_date).hint_text("YYYY-MM-DD").desired_width(100.0));

        egui::ComboBox::from_id_salt("direction_filter")
            .selected_text(filter.direction.label())
            .show_ui(ui, |ui| {
                for direction in Direction::all() {
                    ui.selectable_value(&mut filter.direction, *direction, direction.label());
                }
            });

        if ui.add_enabled(!dashboard.filter.is_empty(), egui::Button::new("Clear")).clicked() {
            app.handle_filter_clear();
        }
    });
    if filter != dashboard.filter {
        app.handle_filter_change(filter.clone());
    }
    ui.add_space(8.0);

    let transactions = filter_transactions(&account.transactions, &filter, customer);
    tables::render_transactions(ui, &transactions, customer, theme);
}

fn render_profile(ctx: &egui::Context, customer: &CustomerData, app: &mut App, theme: &Theme) {
    let mut open = true;
    egui::Window::new("Profile")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 60.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(initials(&customer.first_name, &customer.last_name))
                        .size(32.0)
                        .strong()
                        .color(theme.selected),
                );
                ui.label(egui::RichText::new(format!("{} {}", customer.first_name, customer.last_name)).strong());
            });
            ui.separator();
            egui::Grid::new("profile_grid").num_columns(2).show(ui, |ui| {
                ui.colored_label(theme.dim, "Email");
                ui.label(&customer.email);
                ui.end_row();
                ui.colored_label(theme.dim, "Phone");
                ui.label(&customer.phone_number);
                ui.end_row();
                ui.colored_label(theme.dim, "Accounts");
                ui.label(customer.accounts.len().to_string());
                ui.end_row();
            });
        });
    if !open {
        app.handle_profile_toggle();
    }
}

fn render_add_account_modal(ctx: &egui::Context, dashboard: &DashboardState, app: &mut App, theme: &Theme) {
    let modal = &dashboard.add_account;
    egui::Window::new("Add account")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Currency");
            ui.horizontal(|ui| {
                for account_type in AccountType::all() {
                    if ui
                        .selectable_label(modal.account_type == *account_type, account_type.code())
                        .clicked()
                    {
                        app.handle_add_account_type(*account_type);
                    }
                }
            });
            ui.add_space(8.0);

            if let Some(error) = &modal.error {
                forms::render_error(ui, error, theme);
            }

            ui.horizontal(|ui| {
                let label = if modal.pending { "Creating..." } else { "Create" };
                if ui.add_enabled(!modal.pending, egui::Button::new(label)).clicked() {
                    app.handle_add_account_submit();
                }
                if ui.button("Cancel").clicked() {
                    app.handle_add_account_close();
                }
            });
        });
}

fn render_toast(ctx: &egui::Context, message: &str, theme: &Theme) {
    egui::Area::new(egui::Id::new("dashboard_toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).fill(theme.colors.surface).show(ui, |ui| {
                ui.colored_label(theme.success, message);
            });
        });
}
