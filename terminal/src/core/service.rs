//! # Service Traits
//!
//! Seams for dependency injection. Handlers only ever talk to the remote API
//! and to session persistence through these traits, so tests swap in mocks and
//! the binary swaps in [`crate::services::api::ApiClient`] and
//! [`crate::services::session::FileSessionStore`].

use async_trait::async_trait;
use shared::{AccountType, CustomerData, LoginResponse, RegisterRequest};

use crate::core::error::{ApiError, Result};
use crate::services::session::Session;

/// Remote customer API.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange credentials for a bearer token and role
    async fn login(&self, email: String, password: String) -> std::result::Result<LoginResponse, ApiError>;

    /// Register a new customer
    async fn register(&self, request: RegisterRequest) -> std::result::Result<(), ApiError>;

    /// Email a verification code to `email`
    async fn send_verification_code(&self, email: String) -> std::result::Result<(), ApiError>;

    /// Check a verification code for `email`
    async fn check_verification_code(&self, email: String, code: String) -> std::result::Result<(), ApiError>;

    /// Set a new password for `email`
    async fn reset_password(&self, email: String, password: String) -> std::result::Result<(), ApiError>;

    /// Fetch the whole customer document. An empty token is sent as an empty credential.
    async fn fetch_customer(&self, token: &str) -> std::result::Result<CustomerData, ApiError>;

    /// Open a new account in the given currency
    async fn create_account(&self, token: &str, account_type: AccountType) -> std::result::Result<(), ApiError>;
}

/// Persistent home of the session (token + role).
///
/// Replaces ambient browser storage: created on login, read by dashboard
/// calls, destroyed on logout.
pub trait SessionStore: Send + Sync {
    /// Current session, if any
    fn get(&self) -> Option<Session>;

    /// Replace the stored session
    fn set(&self, session: Session) -> Result<()>;

    /// Forget the stored session
    fn clear(&self) -> Result<()>;
}
