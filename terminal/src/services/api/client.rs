//! # API Client
//!
//! Main HTTP client for the remote customer API.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use shared::{AccountType, CustomerData, ErrorResponse, LoginResponse, RegisterRequest};

use crate::core::config::ClientConfig;
use crate::core::error::ApiError;
use crate::core::service::ApiService;

/// HTTP client for the remote customer API.
///
/// Holds one connection pool; cloning the inner `reqwest::Client` is cheap.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured origin.
    ///
    /// The configured timeout keeps a dead server from leaving a screen pending forever.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    timeout_secs = config.request_timeout_secs,
                    "HTTP client builder failed; using a default client without the request timeout"
                );
                Client::new()
            });

        Self {
            client,
            base_url: config.resolved_api_url(),
        }
    }

    /// Create a client for an explicit origin (tests, tooling).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an endpoint path such as `/api/register`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential; a missing token becomes an empty header value.
    pub(crate) fn authorized(request: RequestBuilder, token: &str) -> RequestBuilder {
        if token.is_empty() {
            request.header(AUTHORIZATION, "")
        } else {
            request.header(AUTHORIZATION, format!("Bearer {}", token))
        }
    }

    /// Send a request and turn non-success statuses into [`ApiError::Status`].
    ///
    /// Error bodies are read leniently: a body that is not JSON, or JSON without
    /// a `message`, yields `message: None`.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ErrorResponse>(&body)
            .ok()
            .and_then(|error| error.message);

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<(), ApiError> {
        crate::services::api::auth::register(self, request).await
    }

    async fn send_verification_code(&self, email: String) -> Result<(), ApiError> {
        crate::services::api::email::send_code(self, email).await
    }

    async fn check_verification_code(&self, email: String, code: String) -> Result<(), ApiError> {
        crate::services::api::email::check_code(self, email, code).await
    }

    async fn reset_password(&self, email: String, password: String) -> Result<(), ApiError> {
        crate::services::api::auth::reset_password(self, email, password).await
    }

    async fn fetch_customer(&self, token: &str) -> Result<CustomerData, ApiError> {
        crate::services::api::customer::fetch_customer(self, token).await
    }

    async fn create_account(&self, token: &str, account_type: AccountType) -> Result<(), ApiError> {
        crate::services::api::customer::create_account(self, token, account_type).await
    }
}
