//! # Email Verification Endpoints
//!
//! Sending and checking the short-lived codes used by registration and password reset.

use shared::{CodeCheckRequest, EmailRequest};

use super::client::ApiClient;
use super::endpoints;
use crate::core::error::ApiError;

/// Ask the API to email a verification code.
#[tracing::instrument(skip(client), fields(email = %email))]
pub async fn send_code(client: &ApiClient, email: String) -> Result<(), ApiError> {
    let request = EmailRequest { email };

    client
        .execute(client.client.post(client.url(endpoints::EMAIL_SEND)).json(&request))
        .await
        .map_err(|err| {
            tracing::warn!(status = ?err.status(), error = %err, "Sending verification code failed");
            err
        })?;

    tracing::info!("Verification code sent");
    Ok(())
}

/// Check a verification code.
#[tracing::instrument(skip(client, code), fields(email = %email))]
pub async fn check_code(client: &ApiClient, email: String, code: String) -> Result<(), ApiError> {
    let request = CodeCheckRequest { email, code };

    client
        .execute(client.client.post(client.url(endpoints::EMAIL_CHECK)).json(&request))
        .await?;

    tracing::info!("Verification code accepted");
    Ok(())
}
