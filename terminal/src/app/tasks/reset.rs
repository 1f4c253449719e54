//! # Password Reset Tasks

use std::sync::Arc;

use super::auth::{CODE_SEND_FAILED, INVALID_CODE};
use super::{spawn_page_task, PageScope};
use crate::app::events::AppEvent;
use crate::core::service::ApiService;

pub(crate) const RESET_FAILED: &str = "Could not reset the password";

pub(crate) fn send_code(api: Arc<dyn ApiService>, scope: PageScope, email: String) {
    spawn_page_task(scope, "reset_send_code", async move {
        let result = api
            .send_verification_code(email)
            .await
            .map_err(|e| e.user_message(CODE_SEND_FAILED));
        AppEvent::ResetCodeSent(result)
    });
}

pub(crate) fn check_code(api: Arc<dyn ApiService>, scope: PageScope, email: String, code: String) {
    spawn_page_task(scope, "reset_check_code", async move {
        let result = api
            .check_verification_code(email, code)
            .await
            .map_err(|e| e.user_message(INVALID_CODE));
        AppEvent::ResetCodeChecked(result)
    });
}

pub(crate) fn reset_password(api: Arc<dyn ApiService>, scope: PageScope, email: String, password: String) {
    spawn_page_task(scope, "reset_password", async move {
        let result = api
            .reset_password(email, password)
            .await
            .map_err(|e| e.user_message(RESET_FAILED));
        AppEvent::PasswordReset(result)
    });
}
