//! Request extractors guarding the admin area.

pub mod auth;
