//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the bank client and the remote
//! customer API. All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration, verification code and password reset DTOs
//!   - **[`dto::customer`]**: Customer document, accounts, cards, transactions, payments
//! - **[`utils`]**: Display helpers
//!   - **[`utils::mask_card_number`]**: Hide all but the last four card digits
//!   - **[`utils::mask_account_number`]**: Hide the middle of an account number
//!
//! ## Wire Format
//!
//! The remote API speaks **camelCase** JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`:
//!
//! ```text
//! POST /api/register
//! {
//!   "firstName": "Olena",
//!   "lastName": "Shevchenko",
//!   "email": "olena@example.com",
//!   "password": "secret123",
//!   "phoneNumber": "+380501234567"
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shared::dto::auth::{LoginRequest, LoginResponse};
//! use shared::utils::mask_card_number;
//!
//! let request = LoginRequest {
//!     email: "a@b.com".to_string(),
//!     password: "x".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"email":"a@b.com","password":"x"}"#);
//!
//! assert_eq!(mask_card_number("4441111122223333"), "**** **** **** 3333");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
