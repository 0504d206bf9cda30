//! Error types for giveaway

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for giveaway
#[derive(Debug, Error)]
pub enum GiveawayError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(String),

    /// Source table is missing required columns
    #[error("Malformed source: missing required column(s): {}", missing.join(", "))]
    MalformedSource { missing: Vec<String> },

    /// Draw attempted with no tickets
    #[error("No eligible comments: the ticket pool is empty")]
    EmptyPool,

    /// Draw attempted before the comments were validated
    #[error("Comments have not been validated yet")]
    NotValidated,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Unknown report format
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<GiveawayError>,
    },
}

impl GiveawayError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        GiveawayError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether the caller can recover by supplying different input
    pub fn is_recoverable(&self) -> bool {
        match self {
            GiveawayError::MalformedSource { .. }
            | GiveawayError::EmptyPool
            | GiveawayError::NotValidated
            | GiveawayError::FileNotFound(_) => true,
            GiveawayError::WithContext { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for GiveawayError {
    fn from(err: toml::de::Error) -> Self {
        GiveawayError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for GiveawayError {
    fn from(err: toml::ser::Error) -> Self {
        GiveawayError::Toml(err.to_string())
    }
}

/// Result type alias for giveaway
pub type Result<T> = std::result::Result<T, GiveawayError>;
