//! # Dashboard Tasks
//!
//! Bearer-authorized requests. The token is read from the session store by the
//! caller; an absent session is sent as an empty credential and left for the
//! server to reject.

use std::sync::Arc;

use shared::AccountType;

use super::{spawn_page_task, PageScope};
use crate::app::events::AppEvent;
use crate::core::service::ApiService;

pub(crate) const LOAD_FAILED: &str = "Could not load customer data";
pub(crate) const CREATE_ACCOUNT_FAILED: &str = "Could not create the account";

pub(crate) fn fetch_customer(api: Arc<dyn ApiService>, scope: PageScope, token: String) {
    spawn_page_task(scope, "fetch_customer", async move {
        let result = api
            .fetch_customer(&token)
            .await
            .map_err(|e| e.user_message(LOAD_FAILED));
        AppEvent::CustomerLoaded(result)
    });
}

pub(crate) fn create_account(api: Arc<dyn ApiService>, scope: PageScope, token: String, account_type: AccountType) {
    spawn_page_task(scope, "create_account", async move {
        let result = api
            .create_account(&token, account_type)
            .await
            .map_err(|e| e.user_message(CREATE_ACCOUNT_FAILED));
        AppEvent::AccountCreated(result)
    });
}
