//! # Core Abstractions
//!
//! Core traits, configuration and error types shared by the whole client.
//!
//! ## Modules
//!
//! - **[`error`]**: [`ApiError`] for remote calls, [`AppError`] / [`Result`] for the rest
//! - **[`service`]**: [`ApiService`] and [`SessionStore`] injection seams
//! - **[`config`]**: [`ClientConfig`] loaded from the environment
//!
//! ## Dependency Injection
//!
//! Handlers receive services as trait objects:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bank_terminal::core::{ApiService, ClientConfig, SessionStore};
//! use bank_terminal::services::{api::ApiClient, session::MemorySessionStore};
//!
//! let config = ClientConfig::default();
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config));
//! let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::default());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{ApiError, AppError, Result, CONNECTION_ERROR};
pub use service::{ApiService, SessionStore};
