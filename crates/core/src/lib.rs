//! Domain leaves shared by the Gazette server crates.
//!
//! Everything in this crate is dependency-light and synchronous: shared type
//! aliases, the error taxonomy, the slug generator, upload-name validation,
//! pagination arithmetic, and well-known settings keys. The database and HTTP
//! layers build on top of these.

pub mod error;
pub mod pagination;
pub mod settings;
pub mod slug;
pub mod types;
pub mod uploads;
