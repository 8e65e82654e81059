//! Request handlers.
//!
//! `public` serves the visitor-facing pages; the remaining modules are one
//! per admin resource. Handlers delegate to the repositories in
//! `gazette_db`, render through `views`, and map errors via
//! [`crate::error::AppError`].

pub mod articles;
pub mod auth;
pub mod comments;
pub mod dashboard;
pub mod galleries;
pub mod profile;
pub mod public;
pub mod settings;
pub mod users;
