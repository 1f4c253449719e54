//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.
//!
//! Errors are already turned into the text the issuing screen shows inline.

use shared::{CustomerData, LoginResponse};

/// Async task result, tagged with the page generation it was issued under.
///
/// Results whose generation no longer matches the active page are dropped.
#[derive(Debug, Clone)]
pub struct PageEvent {
    pub generation: u64,
    pub event: AppEvent,
}

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<LoginResponse, String>),
    /// Registration and the follow-up code send completed
    RegisterResult { email: String, result: Result<(), String> },
    /// Verification code checked (registration)
    VerifyResult(Result<(), String>),
    /// Verification code re-sent (registration)
    VerifyCodeResent(Result<(), String>),
    /// Reset code sent (wizard step 1, or resend on step 2)
    ResetCodeSent(Result<(), String>),
    /// Reset code checked (wizard step 2)
    ResetCodeChecked(Result<(), String>),
    /// New password stored (wizard step 3)
    PasswordReset(Result<(), String>),
    /// Customer document fetched
    CustomerLoaded(Result<CustomerData, String>),
    /// Account created
    AccountCreated(Result<(), String>),
}

impl AppEvent {
    /// Variant name, for logs (payloads may carry tokens)
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::LoginResult(_) => "LoginResult",
            AppEvent::RegisterResult { .. } => "RegisterResult",
            AppEvent::VerifyResult(_) => "VerifyResult",
            AppEvent::VerifyCodeResent(_) => "VerifyCodeResent",
            AppEvent::ResetCodeSent(_) => "ResetCodeSent",
            AppEvent::ResetCodeChecked(_) => "ResetCodeChecked",
            AppEvent::PasswordReset(_) => "PasswordReset",
            AppEvent::CustomerLoaded(_) => "CustomerLoaded",
            AppEvent::AccountCreated(_) => "AccountCreated",
        }
    }
}
