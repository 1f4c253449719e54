//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod account_card;
pub mod forms;
pub mod notifications;
pub mod tables;
