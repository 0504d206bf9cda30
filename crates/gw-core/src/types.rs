//! Core type definitions for giveaway

use crate::comment::Comment;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a draw report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawId(pub Uuid);

impl DrawId {
    /// Generate a new DrawId
    pub fn new() -> Self {
        DrawId(Uuid::new_v4())
    }

    /// Parse a DrawId from a string
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(DrawId)
    }
}

impl Default for DrawId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DrawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content hash identifying the comments a draw was made from
///
/// Two loads of the same rows produce the same fingerprint, so a published
/// fingerprint plus seed is enough to replay a draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceFingerprint(pub String);

impl SourceFingerprint {
    /// Hash an ordered list of comments
    pub fn of_comments(comments: &[Comment]) -> Self {
        let mut hasher = blake3::Hasher::new();
        for comment in comments {
            // Length prefixes keep ("ab","c") and ("a","bc") apart
            for field in [comment.username.as_str(), comment.text.as_str()] {
                hasher.update(&(field.len() as u64).to_le_bytes());
                hasher.update(field.as_bytes());
            }
        }
        SourceFingerprint(hasher.finalize().to_hex().to_string())
    }

    /// Shortened form for display
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(16)]
    }
}

impl fmt::Display for SourceFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
