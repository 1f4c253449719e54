//! # Event Handlers
//!
//! User action handlers organized by page. Each validates synchronously,
//! marks its form pending and hands the request to [`crate::app::tasks`].

pub mod auth;
pub mod dashboard;
pub mod navigation;
pub mod reset;
