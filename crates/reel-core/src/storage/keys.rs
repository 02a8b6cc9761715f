//! Storage key layout.

use uuid::Uuid;

use crate::error::{ReelError, Result};

/// Key holding the current session's serialized user.
pub const SESSION: &str = "user";

/// Key holding `user_id`'s serialized movie list.
pub fn movies(user_id: &Uuid) -> String {
    format!("movies-{}", user_id)
}

/// Keys must be non-empty and limited to `[A-Za-z0-9_-]` so they are
/// always safe file stems.
pub fn validate(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ReelError::Storage("Storage key is empty".to_string()));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ReelError::Storage(format!("Invalid storage key: {}", key)));
    }
    Ok(())
}
