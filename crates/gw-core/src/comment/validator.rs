//! Comment eligibility validation

use super::mention::{extract_mentions, fold_mention};
use crate::config::{RuleConfig, DEFAULT_REQUIRED_MENTIONS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Why a comment failed the mention rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Mention count differs from the rule
    WrongCount { found: usize, required: usize },
    /// Right count, but some mentions name the same person
    DuplicateMentions { distinct: usize, required: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::WrongCount { found, required } => {
                write!(f, "{} mention(s), expected exactly {}", found, required)
            }
            Rejection::DuplicateMentions { distinct, required } => {
                write!(
                    f,
                    "only {} distinct mention(s), expected {}",
                    distinct, required
                )
            }
        }
    }
}

/// Result of checking one comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Eligible,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Verdict::Eligible)
    }
}

/// Validator for the exact-distinct-mentions rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentValidator {
    required_mentions: usize,
}

impl CommentValidator {
    /// Create a new validator with the default rule
    pub fn new() -> Self {
        Self {
            required_mentions: DEFAULT_REQUIRED_MENTIONS,
        }
    }

    /// Create a validator requiring `required_mentions` distinct mentions
    pub fn with_required_mentions(required_mentions: usize) -> Self {
        Self { required_mentions }
    }

    /// Create a validator from rule configuration
    pub fn from_config(config: &RuleConfig) -> Self {
        Self::with_required_mentions(config.required_mentions)
    }

    pub fn required_mentions(&self) -> usize {
        self.required_mentions
    }

    /// Check a comment body and explain the outcome
    pub fn check(&self, text: &str) -> Verdict {
        let mentions: Vec<String> = extract_mentions(text)
            .into_iter()
            .map(fold_mention)
            .collect();

        if mentions.len() != self.required_mentions {
            return Verdict::Rejected(Rejection::WrongCount {
                found: mentions.len(),
                required: self.required_mentions,
            });
        }

        let distinct = mentions.iter().collect::<HashSet<_>>().len();
        if distinct != self.required_mentions {
            return Verdict::Rejected(Rejection::DuplicateMentions {
                distinct,
                required: self.required_mentions,
            });
        }

        Verdict::Eligible
    }

    /// Whether a comment body satisfies the rule
    pub fn is_eligible(&self, text: &str) -> bool {
        self.check(text).is_eligible()
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}
