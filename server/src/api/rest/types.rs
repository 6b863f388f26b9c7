//! Request types for the web front-end.

use serde::Deserialize;

/// Longest accepted public link
pub const PUBLIC_KEY_MAX_LEN: usize = 200;

/// The listing form. A missing field deserializes as empty so the page
/// can report it instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub public_key: String,
}

impl LinkForm {
    /// The trimmed link, or `None` when the field is empty or too long.
    pub fn cleaned(&self) -> Option<&str> {
        let value = self.public_key.trim();
        if value.is_empty() || value.chars().count() > PUBLIC_KEY_MAX_LEN {
            return None;
        }
        Some(value)
    }
}
