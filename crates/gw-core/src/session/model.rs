//! Draw session model

use crate::comment::Comment;
use crate::draw::{DrawOutcome, Drawer};
use crate::error::{GiveawayError, Result};
use crate::ticket::{TicketBuilder, ValidationReport};
use crate::types::SourceFingerprint;
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Where a session's comments came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    /// Display name of the source (usually a file path)
    pub name: String,
    /// Data rows read, blank ones included
    pub rows_read: usize,
    /// Rows dropped for a blank username or text
    pub skipped: usize,
}

impl SourceSummary {
    pub fn new(name: impl Into<String>, rows_read: usize, skipped: usize) -> Self {
        Self {
            name: name.into(),
            rows_read,
            skipped,
        }
    }
}

/// Everything carried between the load, validate and draw steps
///
/// A new load means a new session. Validating again replaces the previous
/// report; drawing never changes the session.
#[derive(Debug, Clone)]
pub struct DrawSession {
    source: SourceSummary,
    comments: Vec<Comment>,
    fingerprint: SourceFingerprint,
    loaded_at: DateTime<Utc>,
    report: Option<ValidationReport>,
}

impl DrawSession {
    /// Start a session over loaded comments
    pub fn new(source: SourceSummary, comments: Vec<Comment>) -> Self {
        let fingerprint = SourceFingerprint::of_comments(&comments);
        tracing::debug!(
            "Session over {} comments from {} ({})",
            comments.len(),
            source.name,
            fingerprint.short()
        );
        Self {
            source,
            comments,
            fingerprint,
            loaded_at: Utc::now(),
            report: None,
        }
    }

    /// Start a session from in-memory comments
    pub fn from_comments(name: impl Into<String>, comments: Vec<Comment>) -> Self {
        let rows = comments.len();
        Self::new(SourceSummary::new(name, rows, 0), comments)
    }

    pub fn source(&self) -> &SourceSummary {
        &self.source
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn fingerprint(&self) -> &SourceFingerprint {
        &self.fingerprint
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Latest validation report, if any
    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    pub fn is_validated(&self) -> bool {
        self.report.is_some()
    }

    /// Rebuild the ticket pool from scratch
    pub fn validate(&mut self, builder: &TicketBuilder) -> &ValidationReport {
        let report = builder.build(&self.comments);
        self.report.insert(report)
    }

    /// Draw from the latest validation report
    pub fn draw<R: RngCore>(&self, drawer: &mut Drawer<R>) -> Result<DrawOutcome> {
        let report = self.report.as_ref().ok_or(GiveawayError::NotValidated)?;
        drawer.draw(&report.pool)
    }
}
