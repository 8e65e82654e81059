//! Well-known keys in the `settings` key-value table.

/// Whether public comment submission is accepted. Stored as the literal
/// strings `"true"` / `"false"`; anything else counts as disabled.
pub const COMMENTS_ENABLED: &str = "comments_enabled";

/// Interpret a settings flag value. Only the exact string `"true"` enables.
pub fn flag_enabled(value: Option<&str>) -> bool {
    value == Some("true")
}
