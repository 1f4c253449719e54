//! # Password Reset Handlers
//!
//! One handler per wizard step. A step handler does nothing unless the wizard
//! is actually on that step.

use crate::app::events::PageEvent;
use crate::app::state::{AppState, Page, ResetStep};
use crate::app::tasks::{self, PageScope};
use crate::core::service::ApiService;
use crate::utils::validation::{validate_email, validate_password_match, validate_required};
use async_channel::Sender;
use parking_lot::{RwLock, RwLockWriteGuard};
use std::sync::Arc;

/// Write lock on the wizard, if it is active, idle and on `step`
fn wizard_at(state: &Arc<RwLock<AppState>>, step: ResetStep) -> Option<RwLockWriteGuard<'_, AppState>> {
    let state = state.write();
    if state.page != Page::Forgot || state.reset.step != step || state.reset.pending {
        return None;
    }
    Some(state)
}

/// Step 1: request a code for `email`
pub(crate) fn handle_reset_request_code(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<PageEvent>,
    api: Arc<dyn ApiService>,
    email: String,
) {
    let (scope, email) = {
        let Some(mut state) = wizard_at(&state, ResetStep::RequestCode) else {
            return;
        };

        if let Some(error) = validate_email(&email).error {
            state.reset.error = Some(error);
            return;
        }

        state.reset.email = email.trim().to_string();
        state.reset.error = None;
        state.reset.pending = true;
        (PageScope::current(&state, &event_tx), state.reset.email.clone())
    };

    tasks::reset::send_code(api, scope, email);
}

/// Step 2: check the emailed code
pub(crate) fn handle_reset_check_code(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<PageEvent>,
    api: Arc<dyn ApiService>,
    code: String,
) {
    let (scope, email) = {
        let Some(mut state) = wizard_at(&state, ResetStep::VerifyCode) else {
            return;
        };

        if let Some(error) = validate_required("Verification code", &code).error {
            state.reset.error = Some(error);
            return;
        }

        state.reset.code = code.trim().to_string();
        state.reset.error = None;
        state.reset.info = None;
        state.reset.pending = true;
        (PageScope::current(&state, &event_tx), state.reset.email.clone())
    };

    tasks::reset::check_code(api, scope, email, code.trim().to_string());
}

/// Step 2: send another code to the same address
pub(crate) fn handle_reset_resend_code(state: Arc<RwLock<AppState>>, event_tx: Sender<PageEvent>, api: Arc<dyn ApiService>) {
    let (scope, email) = {
        let Some(mut state) = wizard_at(&state, ResetStep::VerifyCode) else {
            return;
        };

        state.reset.error = None;
        state.reset.info = None;
        state.reset.pending = true;
        (PageScope::current(&state, &event_tx), state.reset.email.clone())
    };

    tasks::reset::send_code(api, scope, email);
}

/// Step 3: set the new password.
///
/// A mismatched confirmation is rejected here and never reaches the server.
pub(crate) fn handle_reset_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<PageEvent>,
    api: Arc<dyn ApiService>,
    new_password: String,
    confirm_password: String,
) {
    let (scope, email) = {
        let Some(mut state) = wizard_at(&state, ResetStep::NewPassword) else {
            return;
        };

        if let Some(error) = validate_password_match(&new_password, &confirm_password).error {
            state.reset.error = Some(error);
            return;
        }

        state.reset.error = None;
        state.reset.pending = true;
        (PageScope::current(&state, &event_tx), state.reset.email.clone())
    };

    tracing::info!(email = %email, "Submitting new password");
    tasks::reset::reset_password(api, scope, email, new_password);
}
