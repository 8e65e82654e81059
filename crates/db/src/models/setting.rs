//! Settings key-value row.

use sqlx::FromRow;

/// One row of the global `settings` key-value table.
#[derive(Debug, Clone, FromRow)]
pub struct Setting {
    pub setting_key: String,
    pub setting_value: String,
}
