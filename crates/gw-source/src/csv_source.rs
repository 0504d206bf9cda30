//! CSV comment source

use gw_core::comment::Comment;
use gw_core::config::SourceConfig;
use gw_core::error::{GiveawayError, Result};
use gw_core::session::{DrawSession, SourceSummary};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Reads comments from a table with a username column and a text column
///
/// Column order and extra columns do not matter. Values are trimmed and rows
/// with a blank username or text are skipped.
#[derive(Debug, Clone)]
pub struct CsvSource {
    username_column: String,
    text_column: String,
    delimiter: u8,
}

impl CsvSource {
    /// Create a source with default column names and `,` delimiter
    pub fn new() -> Self {
        Self::from_config(&SourceConfig::default())
    }

    /// Create a source from configuration
    ///
    /// Non-ASCII delimiters are rejected by config validation; if one slips
    /// through it falls back to `,`.
    pub fn from_config(config: &SourceConfig) -> Self {
        let delimiter = u8::try_from(config.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or(b',');
        Self {
            username_column: config.username_column.trim().to_string(),
            text_column: config.text_column.trim().to_string(),
            delimiter,
        }
    }

    /// Set the column names
    pub fn with_columns(mut self, username: impl Into<String>, text: impl Into<String>) -> Self {
        self.username_column = username.into().trim().to_string();
        self.text_column = text.into().trim().to_string();
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a CSV file into a new session
    pub fn load_path(&self, path: &Path) -> Result<DrawSession> {
        if !path.exists() {
            return Err(GiveawayError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        self.load_reader(path.display().to_string(), file)
    }

    /// Load CSV data from any reader into a new session
    pub fn load_reader<R: Read>(&self, name: impl Into<String>, reader: R) -> Result<DrawSession> {
        let name = name.into();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(csv_error)?.clone();
        let (username_idx, text_idx) = self.locate_columns(&headers)?;
        debug!(
            "Columns in {}: {} at {}, {} at {}",
            name, self.username_column, username_idx, self.text_column, text_idx
        );

        let mut comments = Vec::new();
        let mut rows_read = 0;
        let mut skipped = 0;

        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| csv_error(e).with_context(format!("row {}", idx + 1)))?;
            rows_read += 1;

            let username = record.get(username_idx).unwrap_or("");
            let text = record.get(text_idx).unwrap_or("");
            match Comment::from_fields(username, text) {
                Some(comment) => comments.push(comment.at_row(idx + 1)),
                None => skipped += 1,
            }
        }

        info!(
            "Loaded {} comments from {} ({} rows, {} skipped)",
            comments.len(),
            name,
            rows_read,
            skipped
        );

        Ok(DrawSession::new(
            SourceSummary::new(name, rows_read, skipped),
            comments,
        ))
    }

    /// Find both required columns, reporting every missing one
    fn locate_columns(&self, headers: &csv::StringRecord) -> Result<(usize, usize)> {
        let find = |wanted: &str| {
            // Like a dict keyed by header, a repeated name resolves to its last column
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| h.trim_start_matches('\u{feff}').trim() == wanted)
                .map(|(i, _)| i)
                .last()
        };

        match (find(&self.username_column), find(&self.text_column)) {
            (Some(username), Some(text)) => Ok((username, text)),
            (username, text) => {
                let mut missing = Vec::new();
                if username.is_none() {
                    missing.push(self.username_column.clone());
                }
                if text.is_none() {
                    missing.push(self.text_column.clone());
                }
                Err(GiveawayError::MalformedSource { missing })
            }
        }
    }
}

impl Default for CsvSource {
    fn default() -> Self {
        Self::new()
    }
}

fn csv_error(err: csv::Error) -> GiveawayError {
    GiveawayError::Csv(err.to_string())
}
