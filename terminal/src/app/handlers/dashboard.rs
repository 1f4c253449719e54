//! # Dashboard Handlers
//!
//! Customer document loading, account creation and the purely local dashboard
//! interactions (tabs, selection, filters, reveals, profile panel).

use crate::app::events::PageEvent;
use crate::app::filters::TransactionFilter;
use crate::app::state::{AppState, DashboardTab, Page};
use crate::app::tasks::{self, PageScope};
use crate::core::service::{ApiService, SessionStore};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::AccountType;
use std::sync::Arc;
use std::time::Instant;

/// Bearer token for dashboard calls; empty when there is no session
fn bearer(session: &Arc<dyn SessionStore>) -> String {
    session.get().map(|s| s.access_token).unwrap_or_default()
}

/// Fetch (or re-fetch) the customer document
///
/// Internal handler function - use [`crate::app::App::handle_dashboard_load`] instead.
pub(crate) fn handle_dashboard_load(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<PageEvent>,
    api: Arc<dyn ApiService>,
    session: Arc<dyn SessionStore>,
) {
    let scope = {
        let mut state = state.write();
        if state.page != Page::User {
            return;
        }
        if state.dashboard.loading {
            tracing::debug!("Customer fetch already in flight");
            return;
        }

        state.dashboard.loading = true;
        state.dashboard.error = None;
        PageScope::current(&state, &event_tx)
    };

    tasks::dashboard::fetch_customer(api, scope, bearer(&session));
}

/// Submit the "add account" modal
///
/// Internal handler function - use [`crate::app::App::handle_add_account_submit`] instead.
pub(crate) fn handle_add_account_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<PageEvent>,
    api: Arc<dyn ApiService>,
    session: Arc<dyn SessionStore>,
) {
    let (scope, account_type) = {
        let mut state = state.write();
        if state.page != Page::User || !state.dashboard.add_account.open {
            return;
        }
        if state.dashboard.add_account.pending {
            return;
        }

        state.dashboard.add_account.pending = true;
        state.dashboard.add_account.error = None;
        (PageScope::current(&state, &event_tx), state.dashboard.add_account.account_type)
    };

    tracing::info!(account_type = account_type.code(), "Creating account");
    tasks::dashboard::create_account(api, scope, bearer(&session), account_type);
}

pub(crate) fn handle_add_account_open(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let modal = &mut state.dashboard.add_account;
    modal.open = true;
    modal.error = None;
    modal.account_type = AccountType::default();
}

pub(crate) fn handle_add_account_close(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    // An in-flight request still finishes and refreshes the data
    state.dashboard.add_account.open = false;
    state.dashboard.add_account.error = None;
}

pub(crate) fn handle_add_account_type(state: Arc<RwLock<AppState>>, account_type: AccountType) {
    state.write().dashboard.add_account.account_type = account_type;
}

pub(crate) fn handle_tab_change(state: Arc<RwLock<AppState>>, tab: DashboardTab) {
    state.write().dashboard.tab = tab;
}

pub(crate) fn handle_account_select(state: Arc<RwLock<AppState>>, index: usize) {
    state.write().dashboard.select_account(index);
}

pub(crate) fn handle_filter_change(state: Arc<RwLock<AppState>>, filter: TransactionFilter) {
    state.write().dashboard.filter = filter;
}

pub(crate) fn handle_filter_clear(state: Arc<RwLock<AppState>>) {
    state.write().dashboard.filter.clear();
}

pub(crate) fn handle_profile_toggle(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.dashboard.show_profile = !state.dashboard.show_profile;
}

/// Reveal or mask the card number. Returns the number to put on the clipboard when revealed.
pub(crate) fn handle_card_number_toggle(state: Arc<RwLock<AppState>>, now: Instant) -> Option<String> {
    let mut state = state.write();
    let number = state.dashboard.selected()?.card.card_number.clone();
    if state.dashboard.card_reveal.toggle(now) {
        state.dashboard.toast.show("Card number copied", now);
        Some(number)
    } else {
        None
    }
}

/// Reveal or mask the CVV. Never copied.
pub(crate) fn handle_cvv_toggle(state: Arc<RwLock<AppState>>, now: Instant) {
    let mut state = state.write();
    if state.dashboard.selected().is_some() {
        state.dashboard.cvv_reveal.toggle(now);
    }
}

/// Reveal or mask the account number. Returns the number to copy when revealed.
pub(crate) fn handle_account_number_toggle(state: Arc<RwLock<AppState>>, now: Instant) -> Option<String> {
    let mut state = state.write();
    let number = state.dashboard.selected()?.account_number.clone();
    if state.dashboard.account_reveal.toggle(now) {
        state.dashboard.toast.show("Account number copied", now);
        Some(number)
    } else {
        None
    }
}
