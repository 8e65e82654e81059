//! Server-side HTML rendering with maud.
//!
//! All user-supplied text flows through maud's automatic escaping;
//! [`layout::nl2br`] is the only place that interleaves generated markup
//! with user text, and it escapes line by line.

pub mod admin;
pub mod layout;
pub mod public;
