//! # Authentication Endpoints
//!
//! Login, registration and password reset.

use shared::{LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest};

use super::client::ApiClient;
use super::endpoints;
use crate::core::error::ApiError;

/// Exchange credentials for a bearer token and role.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<LoginResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };

    let result = client
        .execute(client.client.post(client.url(endpoints::LOG_IN)).json(&request))
        .await;

    let duration = start.elapsed();
    match result {
        Ok(response) => {
            let parsed = response.json::<LoginResponse>().await.map_err(|e| {
                tracing::error!(error = %e, "Login response parse error");
                ApiError::from(e)
            });
            if let Ok(login) = &parsed {
                tracing::info!(duration_ms = duration.as_millis(), role = %login.role, "Login successful");
            }
            parsed
        }
        Err(err) => {
            tracing::warn!(
                status = ?err.status(),
                error = %err,
                duration_ms = duration.as_millis(),
                "Login failed"
            );
            Err(err)
        }
    }
}

/// Register a new customer.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<(), ApiError> {
    client
        .execute(client.client.post(client.url(endpoints::REGISTER)).json(&request))
        .await
        .map_err(|err| {
            tracing::warn!(status = ?err.status(), error = %err, "Registration failed");
            err
        })?;

    tracing::info!("Registration accepted");
    Ok(())
}

/// Set a new password for an email address.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn reset_password(client: &ApiClient, email: String, password: String) -> Result<(), ApiError> {
    let request = ResetPasswordRequest { email, password };

    client
        .execute(client.client.put(client.url(endpoints::FORGOT_PASSWORD)).json(&request))
        .await
        .map_err(|err| {
            tracing::warn!(status = ?err.status(), error = %err, "Password reset failed");
            err
        })?;

    tracing::info!("Password reset accepted");
    Ok(())
}
