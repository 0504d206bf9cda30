//! Plain-text console report

use super::exporter::Exporter;
use super::report::DrawReport;
use crate::error::Result;
use std::fmt::Write;

/// Console-style report, one section per step
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }

    fn render_validation(&self, report: &DrawReport, out: &mut String) {
        out.push_str("=== VALIDATION REPORT ===\n");
        let _ = writeln!(out, "Source: {}", report.source.name);
        let _ = writeln!(out, "Comments read: {}", report.comments);
        if report.source.skipped > 0 {
            let _ = writeln!(
                out,
                "Skipped (blank username or text): {}",
                report.source.skipped
            );
        }
        let _ = writeln!(
            out,
            "Valid ({} distinct mentions): {}",
            report.required_mentions, report.valid
        );
        let _ = writeln!(out, "Invalid: {}", report.invalid);
    }

    fn render_rejected(&self, report: &DrawReport, out: &mut String) {
        if report.rejected.is_empty() {
            return;
        }
        out.push_str("\n=== REJECTED COMMENTS ===\n");
        for rejected in &report.rejected {
            let location = rejected
                .row
                .map(|row| format!("row {}", row))
                .unwrap_or_else(|| format!("comment {}", rejected.comment_index + 1));
            let _ = writeln!(
                out,
                "{} @{}: {}",
                location, rejected.username, rejected.reason
            );
        }
    }

    fn render_outcome(&self, report: &DrawReport, out: &mut String) {
        let Some(outcome) = &report.outcome else {
            return;
        };

        out.push_str("\n=== WINNER ===\n");
        let _ = writeln!(out, "@{}", outcome.winner);
        let _ = write!(
            out,
            "Ticket #{} of {}",
            outcome.ticket_index + 1,
            outcome.chances.total_tickets()
        );
        match outcome.seed {
            Some(seed) => {
                let _ = writeln!(out, " (seed {})", seed);
            }
            None => out.push('\n'),
        }

        if report.show_chances {
            out.push_str("\n=== CHANCES PER USER ===\n");
            for entry in outcome.chances.entries() {
                let _ = writeln!(
                    out,
                    "@{}: {} ticket(s) ({:.1}%)",
                    entry.username,
                    entry.tickets,
                    entry.probability * 100.0
                );
            }
        }
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for TextExporter {
    fn export(&self, report: &DrawReport) -> Result<String> {
        let mut out = String::new();

        self.render_validation(report, &mut out);
        self.render_rejected(report, &mut out);

        if !report.has_tickets() {
            let _ = writeln!(
                out,
                "\nNo eligible comments with {} distinct mentions.",
                report.required_mentions
            );
        }

        self.render_outcome(report, &mut out);

        let _ = writeln!(out, "\nFingerprint: {}", report.short_fingerprint());
        Ok(out)
    }

    fn format_name(&self) -> &str {
        "text"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::Comment;
    use crate::export::report::fixtures::{drawn_report, validated_session};
    use crate::session::DrawSession;
    use crate::ticket::TicketBuilder;

    #[test]
    fn test_validation_section() {
        let report = DrawReport::from_session(&validated_session()).unwrap();
        let text = TextExporter::new().export(&report).unwrap();

        assert!(text.contains("=== VALIDATION REPORT ==="));
        assert!(text.contains("Comments read: 3"));
        assert!(text.contains("Skipped (blank username or text): 1"));
        assert!(text.contains("Valid (3 distinct mentions): 2"));
        assert!(text.contains("Invalid: 1"));
        assert!(!text.contains("=== WINNER ==="));
    }

    #[test]
    fn test_winner_and_chances() {
        let report = drawn_report();
        let winner = report.outcome.as_ref().unwrap().winner.clone();
        let text = TextExporter::new().export(&report).unwrap();

        assert!(text.contains(&format!("=== WINNER ===\n@{}\n", winner)));
        assert!(text.contains("(seed 7)"));
        assert!(text.contains("@alice: 1 ticket(s) (50.0%)"));
        assert!(text.contains("@carol: 1 ticket(s) (50.0%)"));
    }

    #[test]
    fn test_rejected_listing() {
        let text = TextExporter::new().export(&drawn_report()).unwrap();
        assert!(text.contains("row 2 @bob: only 1 distinct mention(s), expected 3"));
    }

    #[test]
    fn test_chances_hidden() {
        let report = drawn_report().with_chances(false);
        let text = TextExporter::new().export(&report).unwrap();
        assert!(!text.contains("CHANCES PER USER"));
    }

    #[test]
    fn test_no_eligible_message() {
        let mut session = DrawSession::from_comments("x", vec![Comment::new("bob", "@a @a @a")]);
        session.validate(&TicketBuilder::default());
        let report = DrawReport::from_session(&session).unwrap();
        let text = TextExporter::new().export(&report).unwrap();
        assert!(text.contains("No eligible comments with 3 distinct mentions."));
    }
}
