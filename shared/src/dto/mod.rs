//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the remote
//! customer API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, email verification and password reset
//! - [`customer`] - Customer document with accounts, cards, transactions and payments
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (`#[serde(rename_all = "camelCase")]`)
//! - **Collections**: missing arrays deserialize as empty (`#[serde(default)]`)
//! - **Optional fields**: omitted when `None`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/log-in
//! Content-Type: application/json
//!
//! { "email": "a@b.com", "password": "x" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "role": "ROLE_USER" }
//! ```

pub mod auth;
pub mod customer;

pub use auth::*;
pub use customer::*;
