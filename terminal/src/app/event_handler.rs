//! # Event Handler
//!
//! Handles async results from background tasks, updating application state accordingly.
//!
//! Every result is checked against the page generation first: a result issued
//! for a page that has since been left is dropped without touching state.

use std::time::Instant;

use shared::{CustomerData, LoginResponse};

use crate::app::events::{AppEvent, PageEvent};
use crate::app::state::{route_for_role, Notification, Page, ResetStep, RESET_REDIRECT_DELAY};
use crate::app::App;
use crate::services::session::Session;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: PageEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: PageEvent) {
        let PageEvent { generation, event } = event;

        if !self.state.read().is_current(generation) {
            tracing::debug!(event = event.name(), generation, "Dropping result for a page that is gone");
            return;
        }
        tracing::debug!(event = event.name(), success = event_succeeded(&event), "Processing event");

        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::RegisterResult { email, result } => self.handle_register_result(email, result),
            AppEvent::VerifyResult(result) => self.handle_verify_result(result),
            AppEvent::VerifyCodeResent(result) => self.handle_verify_code_resent(result),
            AppEvent::ResetCodeSent(result) => self.handle_reset_code_sent(result),
            AppEvent::ResetCodeChecked(result) => self.handle_reset_code_checked(result),
            AppEvent::PasswordReset(result) => self.handle_password_reset(result),
            AppEvent::CustomerLoaded(result) => self.handle_customer_loaded(result),
            AppEvent::AccountCreated(result) => self.handle_account_created(result),
        }
    }
}

fn event_succeeded(event: &AppEvent) -> bool {
    match event {
        AppEvent::LoginResult(r) => r.is_ok(),
        AppEvent::RegisterResult { result, .. } => result.is_ok(),
        AppEvent::CustomerLoaded(r) => r.is_ok(),
        AppEvent::VerifyResult(r)
        | AppEvent::VerifyCodeResent(r)
        | AppEvent::ResetCodeSent(r)
        | AppEvent::ResetCodeChecked(r)
        | AppEvent::PasswordReset(r)
        | AppEvent::AccountCreated(r) => r.is_ok(),
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<LoginResponse, String>) {
        let response = match result {
            Ok(response) => response,
            Err(message) => {
                tracing::info!(error = %message, "Login rejected");
                let mut state = self.state.write();
                state.login.pending = false;
                state.login.error = Some(message);
                return;
            }
        };

        let page = route_for_role(&response.role);
        if let Err(e) = self.session.set(Session::new(response.token, response.role.clone())) {
            tracing::error!(error = %e, "Failed to save session");
            let mut state = self.state.write();
            state.login.pending = false;
            state.login.error = Some("Could not save the session".to_string());
            return;
        }

        tracing::info!(role = %response.role, page = page.title(), "Logged in");
        self.state.write().enter(page.clone());

        if page == Page::User {
            self.handle_dashboard_load();
        }
    }

    fn handle_register_result(&mut self, email: String, result: Result<(), String>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => {
                tracing::info!(email = %email, "Registered, awaiting verification");
                state.enter(Page::Verify { email: email.clone() });
                state.verify.info = Some(format!("We sent a verification code to {}", email));
            }
            Err(message) => {
                state.register.pending = false;
                state.register.error = Some(message);
            }
        }
    }

    fn handle_verify_result(&mut self, result: Result<(), String>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => {
                state.enter(Page::Login);
                state.login.notice = Some("Email verified. You can now sign in.".to_string());
            }
            Err(message) => {
                state.verify.pending = false;
                state.verify.error = Some(message);
            }
        }
    }

    fn handle_verify_code_resent(&mut self, result: Result<(), String>) {
        let mut state = self.state.write();
        state.verify.pending = false;
        match result {
            Ok(()) => state.verify.info = Some("A new code has been sent".to_string()),
            Err(message) => state.verify.error = Some(message),
        }
    }

    fn handle_reset_code_sent(&mut self, result: Result<(), String>) {
        let mut state = self.state.write();
        let wizard = &mut state.reset;
        wizard.pending = false;
        match result {
            Ok(()) if wizard.step == ResetStep::RequestCode => {
                wizard.step = ResetStep::VerifyCode;
                wizard.info = Some(format!("We sent a verification code to {}", wizard.email));
            }
            Ok(()) => wizard.info = Some("A new code has been sent".to_string()),
            Err(message) => wizard.error = Some(message),
        }
    }

    fn handle_reset_code_checked(&mut self, result: Result<(), String>) {
        let mut state = self.state.write();
        let wizard = &mut state.reset;
        wizard.pending = false;
        match result {
            Ok(()) => {
                wizard.step = ResetStep::NewPassword;
                wizard.info = None;
            }
            Err(message) => wizard.error = Some(message),
        }
    }

    fn handle_password_reset(&mut self, result: Result<(), String>) {
        let mut state = self.state.write();
        let wizard = &mut state.reset;
        wizard.pending = false;
        match result {
            Ok(()) => {
                tracing::info!(email = %wizard.email, "Password reset");
                wizard.step = ResetStep::Done;
                wizard.new_password.clear();
                wizard.confirm_password.clear();
                wizard.info = Some("Your password has been changed".to_string());
                wizard.redirect_at = Some(Instant::now() + RESET_REDIRECT_DELAY);
            }
            Err(message) => wizard.error = Some(message),
        }
    }

    fn handle_customer_loaded(&mut self, result: Result<CustomerData, String>) {
        let mut state = self.state.write();
        let dashboard = &mut state.dashboard;
        dashboard.loading = false;
        match result {
            Ok(customer) => {
                dashboard.error = None;
                dashboard.set_customer(customer);
            }
            Err(message) => {
                tracing::warn!(error = %message, "Customer data unavailable");
                dashboard.error = Some(message);
            }
        }
    }

    fn handle_account_created(&mut self, result: Result<(), String>) {
        {
            let mut state = self.state.write();
            let modal = &mut state.dashboard.add_account;
            modal.pending = false;
            if let Err(message) = result {
                modal.error = Some(message);
                return;
            }
            modal.open = false;
            modal.error = None;
            state.notify(Notification::Success("Account created".to_string()));
        }

        self.handle_dashboard_load();
    }
}
