//! # Screens
//!
//! One render function per page.

pub mod admin;
pub mod dashboard;
pub mod forgot;
pub mod login;
pub mod register;
pub mod verify;
