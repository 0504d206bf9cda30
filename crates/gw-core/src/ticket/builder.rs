//! Ticket assignment from validated comments

use super::pool::{Ticket, TicketPool};
use crate::comment::{Comment, CommentValidator, Rejection, Verdict};
use serde::{Deserialize, Serialize};

/// A comment that earned no ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedComment {
    /// Position in the loaded comment list
    pub comment_index: usize,
    /// 1-based source row, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    pub username: String,
    pub reason: Rejection,
}

/// Outcome of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Tickets in comment order
    pub pool: TicketPool,
    /// Comments that failed the rule, in comment order
    pub rejected: Vec<RejectedComment>,
    /// Rule the pass was run with
    pub required_mentions: usize,
}

impl ValidationReport {
    pub fn valid_count(&self) -> usize {
        self.pool.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.rejected.len()
    }

    /// Comments examined in this pass
    pub fn total(&self) -> usize {
        self.valid_count() + self.invalid_count()
    }

    /// Whether a draw can be made from this report
    pub fn has_tickets(&self) -> bool {
        !self.pool.is_empty()
    }
}

/// Converts comments into a weighted ticket pool
///
/// Holds only the rule, so building twice from the same comments gives the
/// same report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketBuilder {
    validator: CommentValidator,
}

impl TicketBuilder {
    /// Create a builder using the given validator
    pub fn new(validator: CommentValidator) -> Self {
        Self { validator }
    }

    /// Run the rule over every comment, in order
    pub fn build(&self, comments: &[Comment]) -> ValidationReport {
        let mut report = ValidationReport {
            required_mentions: self.validator.required_mentions(),
            ..ValidationReport::default()
        };

        for (comment_index, comment) in comments.iter().enumerate() {
            match self.validator.check(&comment.text) {
                Verdict::Eligible => report.pool.push(Ticket {
                    username: comment.username.clone(),
                    comment_index,
                }),
                Verdict::Rejected(reason) => {
                    tracing::trace!(
                        "Rejected comment {} by {}: {}",
                        comment_index,
                        comment.username,
                        reason
                    );
                    report.rejected.push(RejectedComment {
                        comment_index,
                        row: comment.row,
                        username: comment.username.clone(),
                        reason,
                    });
                }
            }
        }

        tracing::debug!(
            "Validated {} comments: {} valid, {} invalid",
            report.total(),
            report.valid_count(),
            report.invalid_count()
        );
        report
    }
}
