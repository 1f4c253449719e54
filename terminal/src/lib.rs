//! # Bank Terminal - Library Root
//!
//! A **native desktop client** for a retail-banking customer API.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Sign in / sign up**: credential login with role-based landing, registration
//!   with email verification
//! - **Password reset**: three-step wizard (request code, verify code, new password)
//! - **Dashboard**: accounts, cards, transactions with date/direction filters,
//!   payments, account creation
//! - **Sensitive values**: card number, CVV and account number masked by default,
//!   revealed for five seconds on request
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              bank-terminal (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  tracing       - Structured file logging               │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP/JSON                    │ JSON file
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Customer API   │          │   Session store         │
//! │  (remote)       │          │   (token + role)        │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Page state machine, handlers, async tasks, filters and reveal timers
//! - **core**: Configuration, error types, service traits
//! - **services**: `api` (HTTP client) and `session` (session persistence)
//! - **ui**: One screen per page plus shared widgets and theme
//! - **debug**: Logging setup
//! - **utils**: Form validation
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   ├── core::service::ApiService   ◀── services::api::ApiClient
//!   │   └── core::service::SessionStore ◀── services::session::FileSessionStore
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (login, register, verify, forgot, dashboard, admin)
//!       ├── widgets::* (forms, notifications, account card)
//!       └── theme
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! - Main thread: input and rendering (single-threaded)
//! - Async tasks: network requests (Tokio, multi-threaded)
//!
//! Results flow back to the main thread as [`app::PageEvent`]s, tagged with the
//! page they were issued for.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`. Locks are held for
//! one update at a time; the renderer draws from a cloned snapshot.
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p bank-terminal
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Page};
pub use core::{AppError, Result};
