//! # Customer and Account Endpoints
//!
//! Bearer-authorized calls made from the dashboard.

use shared::{AccountType, CreateAccountRequest, CustomerData};

use super::client::ApiClient;
use super::endpoints;
use crate::core::error::ApiError;

/// Fetch the whole customer document.
#[tracing::instrument(skip(client, token), fields(has_token = !token.is_empty()))]
pub async fn fetch_customer(client: &ApiClient, token: &str) -> Result<CustomerData, ApiError> {
    let request = ApiClient::authorized(client.client.get(client.url(endpoints::CUSTOMER)), token);

    let response = client.execute(request).await.map_err(|err| {
        tracing::warn!(status = ?err.status(), error = %err, "Customer fetch failed");
        err
    })?;

    let customer = response.json::<CustomerData>().await?;

    tracing::info!(accounts = customer.accounts.len(), "Customer data loaded");
    Ok(customer)
}

/// Open a new account.
#[tracing::instrument(skip(client, token), fields(account_type = account_type.code()))]
pub async fn create_account(client: &ApiClient, token: &str, account_type: AccountType) -> Result<(), ApiError> {
    let body = CreateAccountRequest { account_type };
    let request = ApiClient::authorized(client.client.post(client.url(endpoints::CREATE_ACCOUNT)), token).json(&body);

    client.execute(request).await.map_err(|err| {
        tracing::warn!(status = ?err.status(), error = %err, "Account creation failed");
        err
    })?;

    tracing::info!("Account created");
    Ok(())
}
