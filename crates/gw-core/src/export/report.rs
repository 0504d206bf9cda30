//! Draw report data

use crate::draw::DrawOutcome;
use crate::error::{GiveawayError, Result};
use crate::session::{DrawSession, SourceSummary};
use crate::ticket::RejectedComment;
use crate::types::DrawId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to show about a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawReport {
    /// Report ID
    pub id: DrawId,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Input source summary
    pub source: SourceSummary,
    /// Content hash of the loaded comments
    pub fingerprint: String,
    /// Comments that reached validation
    pub comments: usize,
    /// Comments that earned a ticket
    pub valid: usize,
    /// Comments that failed the rule
    pub invalid: usize,
    /// Distinct mentions the rule asked for
    pub required_mentions: usize,
    /// Rejected comments, when requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedComment>,
    /// Draw result, when a draw was made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<DrawOutcome>,
    /// Render the per-user chance table
    #[serde(skip, default = "default_true")]
    pub show_chances: bool,
}

fn default_true() -> bool {
    true
}

impl DrawReport {
    /// Summarize a validated session
    pub fn from_session(session: &DrawSession) -> Result<Self> {
        let report = session.report().ok_or(GiveawayError::NotValidated)?;

        Ok(Self {
            id: DrawId::new(),
            generated_at: Utc::now(),
            source: session.source().clone(),
            fingerprint: session.fingerprint().to_string(),
            comments: session.comment_count(),
            valid: report.valid_count(),
            invalid: report.invalid_count(),
            required_mentions: report.required_mentions,
            rejected: Vec::new(),
            outcome: None,
            show_chances: true,
        })
    }

    /// Attach the rejected-comment listing from the session's report
    pub fn with_rejected(mut self, session: &DrawSession) -> Self {
        if let Some(report) = session.report() {
            self.rejected = report.rejected.clone();
        }
        self
    }

    /// Attach a draw result
    pub fn with_outcome(mut self, outcome: DrawOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Toggle the chance table in rendered output
    pub fn with_chances(mut self, show: bool) -> Self {
        self.show_chances = show;
        self
    }

    /// Whether any comment earned a ticket
    pub fn has_tickets(&self) -> bool {
        self.valid > 0
    }

    /// Shortened fingerprint for display
    pub fn short_fingerprint(&self) -> &str {
        &self.fingerprint[..self.fingerprint.len().min(16)]
    }
}
