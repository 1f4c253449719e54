//! # Authentication Handlers
//!
//! Handlers for login, registration and email verification.

use crate::app::events::PageEvent;
use crate::app::state::{AppState, Page};
use crate::app::tasks::{self, PageScope};
use crate::core::service::ApiService;
use crate::utils::validation::{first_error, validate_email, validate_required};
use async_channel::Sender;
use parking_lot::RwLock;
use shared::RegisterRequest;
use std::sync::Arc;

/// Handle login form submission
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<PageEvent>,
    api: Arc<dyn ApiService>,
    email: String,
    password: String,
) {
    let scope = {
        let mut state = state.write();
        if state.page != Page::Login {
            return;
        }
        if state.login.pending {
            tracing::debug!("Login already in flight, ignoring submit");
            return;
        }

        if let Some(error) = first_error([validate_email(&email), validate_required("Password", &password)]) {
            state.login.error = Some(error);
            return;
        }

        state.login.error = None;
        state.login.notice = None;
        state.login.pending = true;
        PageScope::current(&state, &event_tx)
    };

    tracing::info!("Submitting login");
    tasks::auth::login(api, scope, email.trim().to_string(), password);
}

/// Handle registration form submission
///
/// Internal handler function - use [`crate::app::App::handle_register_click`] instead.
pub(crate) fn handle_register_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<PageEvent>,
    api: Arc<dyn ApiService>,
    mut request: RegisterRequest,
) {
    let scope = {
        let mut state = state.write();
        if state.page != Page::Register {
            return;
        }
        if state.register.pending {
            tracing::debug!("Registration already in flight, ignoring submit");
            return;
        }

        let error = first_error([
            validate_required("First name", &request.first_name),
            validate_required("Last name", &request.last_name),
            validate_email(&request.email),
            validate_required("Password", &request.password),
            validate_required("Phone number", &request.phone_number),
        ]);
        if let Some(error) = error {
            state.register.error = Some(error);
            return;
        }

        state.register.error = None;
        state.register.pending = true;
        PageScope::current(&state, &event_tx)
    };

    request.email = request.email.trim().to_string();
    tracing::info!(email = %request.email, "Submitting registration");
    tasks::auth::register(api, scope, request);
}

/// Handle verification code submission
///
/// Internal handler function - use [`crate::app::App::handle_verify_click`] instead.
pub(crate) fn handle_verify_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<PageEvent>,
    api: Arc<dyn ApiService>,
    code: String,
) {
    let (scope, email) = {
        let mut state = state.write();
        let email = match &state.page {
            Page::Verify { email } => email.clone(),
            _ => return,
        };
        if state.verify.pending {
            return;
        }

        if let Some(error) = validate_required("Verification code", &code).error {
            state.verify.error = Some(error);
            return;
        }

        state.verify.error = None;
        state.verify.info = None;
        state.verify.pending = true;
        (PageScope::current(&state, &event_tx), email)
    };

    tasks::auth::check_code(api, scope, email, code.trim().to_string());
}

/// Handle "resend code" on the verification page
///
/// Internal handler function - use [`crate::app::App::handle_verify_resend_click`] instead.
pub(crate) fn handle_verify_resend_click(state: Arc<RwLock<AppState>>, event_tx: Sender<PageEvent>, api: Arc<dyn ApiService>) {
    let (scope, email) = {
        let mut state = state.write();
        let email = match &state.page {
            Page::Verify { email } => email.clone(),
            _ => return,
        };
        if state.verify.pending {
            return;
        }

        state.verify.error = None;
        state.verify.info = None;
        state.verify.pending = true;
        (PageScope::current(&state, &event_tx), email)
    };

    tracing::info!(email = %email, "Resending verification code");
    tasks::auth::resend_code(api, scope, email);
}
