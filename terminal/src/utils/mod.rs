//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form input validation (required fields, email shape, password confirmation)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers (card masking, dates, initials)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
