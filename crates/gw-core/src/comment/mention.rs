//! Mention extraction

use regex::Regex;
use std::sync::LazyLock;

/// `@` followed by one or more handle characters
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9._]+)").expect("mention pattern is valid"));

/// Extract mention tokens from `text`, without the leading `@`
///
/// Every occurrence is kept, duplicates included, in left-to-right order.
/// Matches do not overlap, so `a@b@c` yields `b` and `c`.
pub fn extract_mentions(text: &str) -> Vec<&str> {
    MENTION_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Fold a mention for identity comparison
pub fn fold_mention(mention: &str) -> String {
    mention.to_lowercase()
}
