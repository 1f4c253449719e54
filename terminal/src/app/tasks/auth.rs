//! # Authentication Tasks
//!
//! Login, registration and email verification requests.

use std::sync::Arc;

use shared::RegisterRequest;

use super::{spawn_page_task, PageScope};
use crate::app::events::AppEvent;
use crate::core::service::ApiService;

pub(crate) const LOGIN_FAILED: &str = "Login failed";
pub(crate) const REGISTRATION_FAILED: &str = "Registration failed";
pub(crate) const CODE_SEND_FAILED: &str = "Could not send the verification code";
pub(crate) const INVALID_CODE: &str = "Invalid verification code";

pub(crate) fn login(api: Arc<dyn ApiService>, scope: PageScope, email: String, password: String) {
    spawn_page_task(scope, "login", async move {
        let result = api
            .login(email, password)
            .await
            .map_err(|e| e.user_message(LOGIN_FAILED));
        AppEvent::LoginResult(result)
    });
}

/// Register, then ask for the first verification code.
///
/// The email travels with the result so the verify page gets exactly what was submitted.
pub(crate) fn register(api: Arc<dyn ApiService>, scope: PageScope, request: RegisterRequest) {
    spawn_page_task(scope, "register", async move {
        let email = request.email.clone();

        if let Err(e) = api.register(request).await {
            return AppEvent::RegisterResult {
                email,
                result: Err(e.user_message(REGISTRATION_FAILED)),
            };
        }

        let result = api
            .send_verification_code(email.clone())
            .await
            .map_err(|e| e.user_message(CODE_SEND_FAILED));
        AppEvent::RegisterResult { email, result }
    });
}

pub(crate) fn check_code(api: Arc<dyn ApiService>, scope: PageScope, email: String, code: String) {
    spawn_page_task(scope, "verify_code", async move {
        let result = api
            .check_verification_code(email, code)
            .await
            .map_err(|e| e.user_message(INVALID_CODE));
        AppEvent::VerifyResult(result)
    });
}

pub(crate) fn resend_code(api: Arc<dyn ApiService>, scope: PageScope, email: String) {
    spawn_page_task(scope, "resend_code", async move {
        let result = api
            .send_verification_code(email)
            .await
            .map_err(|e| e.user_message(CODE_SEND_FAILED));
        AppEvent::VerifyCodeResent(result)
    });
}
