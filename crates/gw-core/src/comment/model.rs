//! Comment data model

use serde::{Deserialize, Serialize};

/// A single comment read from the input source
///
/// Both fields are stored trimmed. Comments are never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Commenter's handle, as written in the source
    pub username: String,
    /// Comment body
    pub text: String,
    /// 1-based data row in the source table, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
}

impl Comment {
    /// Create a comment from already-cleaned fields
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            username: username.into().trim().to_string(),
            text: text.into().trim().to_string(),
            row: None,
        }
    }

    /// Build a comment from raw fields, dropping it when either is blank
    pub fn from_fields(username: &str, text: &str) -> Option<Self> {
        let username = username.trim();
        let text = text.trim();
        if username.is_empty() || text.is_empty() {
            return None;
        }
        Some(Self::new(username, text))
    }

    /// Attach the source row number
    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}
