//! # Services Module
//!
//! External integrations of the bank client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/        - Remote customer API client
//! │                 (login, registration, verification, reset, dashboard data)
//! └── session.rs  - Session persistence (bearer token + role)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Bank client (egui)                  │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐       │
//! │  │  ApiClient       │       │  SessionStore    │       │
//! │  │  (api/)          │       │  (session.rs)    │       │
//! │  └────────┬─────────┘       └────────┬─────────┘       │
//! │           │                          │                 │
//! └───────────┼──────────────────────────┼─────────────────┘
//!             │ HTTP/JSON                │ JSON file
//!             ▼                          ▼
//! ┌─────────────────────────┐  ┌──────────────────────────┐
//! │  Customer API           │  │  ./bank-session.json     │
//! │  /api/v1/log-in         │  │  {accessToken, role}     │
//! │  /api/register          │  └──────────────────────────┘
//! │  /api/email/{send,check}│
//! │  /api/customers/*       │
//! │  /api/accounts/create   │
//! └─────────────────────────┘
//! ```
//!
//! Both services are reached only through the traits in [`crate::core::service`].

pub mod api;
pub mod session;
