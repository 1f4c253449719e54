//! # Navigation Handlers
//!
//! Handlers for explicit page links and logout. Authenticated pages are only
//! ever entered through a successful login.

use crate::app::state::{AppState, Notification, Page};
use crate::core::service::SessionStore;
use parking_lot::RwLock;
use std::sync::Arc;

/// Follow a link to a public page ("Create an account", "Forgot password?", "Back to sign in")
///
/// Internal handler function - use [`crate::app::App::handle_navigate`] instead.
pub(crate) fn handle_navigate(state: Arc<RwLock<AppState>>, page: Page) {
    let mut state = state.write();

    if page.is_authenticated() {
        tracing::warn!(page = page.title(), "Refusing direct navigation to an authenticated page");
        return;
    }
    if matches!(page, Page::Verify { .. }) {
        tracing::warn!("Verification is only reachable from registration");
        return;
    }

    state.enter(page);
}

/// Forget the session and return to login
///
/// Internal handler function - use [`crate::app::App::handle_logout`] instead.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>, session: Arc<dyn SessionStore>) {
    if let Err(e) = session.clear() {
        tracing::error!(error = %e, "Failed to clear session");
        state.write().notify(Notification::Error("Could not clear the saved session".to_string()));
    }

    let mut state = state.write();
    state.enter(Page::Login);
    tracing::info!("Logged out");
}
