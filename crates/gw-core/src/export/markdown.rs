//! Markdown exporter for draw reports

use super::exporter::Exporter;
use super::report::DrawReport;
use crate::error::Result;

/// Markdown exporter
pub struct MarkdownExporter {
    /// Include the rejected comments table
    include_rejected: bool,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
    pub fn new() -> Self {
        Self {
            include_rejected: true,
        }
    }

    /// Set whether to include rejected comments
    pub fn with_rejected(mut self, include: bool) -> Self {
        self.include_rejected = include;
        self
    }

    /// Render the report header
    fn render_header(&self, report: &DrawReport) -> String {
        let mut header = String::new();
        header.push_str("# Giveaway Draw Report\n\n");
        header.push_str(&format!("**Draw:** `{}`\n", report.id));
        header.push_str(&format!(
            "**Date:** {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        header.push_str(&format!("**Source:** `{}`\n", report.source.name));
        header.push_str(&format!("**Fingerprint:** `{}`\n", report.fingerprint));
        header.push('\n');
        header
    }

    /// Render the validation summary
    fn render_summary(&self, report: &DrawReport) -> String {
        let mut summary = String::new();
        summary.push_str("## Summary\n\n");
        summary.push_str(&format!("- **Rows Read:** {}\n", report.source.rows_read));
        summary.push_str(&format!("- **Skipped Rows:** {}\n", report.source.skipped));
        summary.push_str(&format!("- **Comments:** {}\n", report.comments));
        summary.push_str(&format!(
            "- **Valid ({} distinct mentions):** {}\n",
            report.required_mentions, report.valid
        ));
        summary.push_str(&format!("- **Invalid:** {}\n", report.invalid));
        summary.push('\n');
        summary
    }

    fn render_rejected(&self, report: &DrawReport) -> String {
        if !self.include_rejected || report.rejected.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        output.push_str("## Rejected Comments\n\n");
        output.push_str("| Row | User | Reason |\n");
        output.push_str("|-----|------|--------|\n");
        for rejected in &report.rejected {
            let row = rejected
                .row
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | @{} | {} |\n",
                row, rejected.username, rejected.reason
            ));
        }
        output.push('\n');
        output
    }

    fn render_outcome(&self, report: &DrawReport) -> String {
        let Some(outcome) = &report.outcome else {
            if report.has_tickets() {
                return String::new();
            }
            return format!(
                "> No eligible comments with {} distinct mentions.\n",
                report.required_mentions
            );
        };

        let mut output = String::new();
        output.push_str("## Winner\n\n");
        output.push_str(&format!("🏆 **@{}**\n\n", outcome.winner));
        output.push_str(&format!(
            "Ticket #{} of {}",
            outcome.ticket_index + 1,
            outcome.chances.total_tickets()
        ));
        if let Some(seed) = outcome.seed {
            output.push_str(&format!(", seed `{}`", seed));
        }
        output.push_str("\n\n");

        if report.show_chances {
            output.push_str("## Chances\n\n");
            output.push_str("| User | Tickets | Chance |\n");
            output.push_str("|------|---------|--------|\n");
            for entry in outcome.chances.entries() {
                output.push_str(&format!(
                    "| @{} | {} | {:.1}% |\n",
                    entry.username,
                    entry.tickets,
                    entry.probability * 100.0
                ));
            }
            output.push('\n');
        }

        output
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, report: &DrawReport) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.render_header(report));
        output.push_str(&self.render_summary(report));
        output.push_str(&self.render_rejected(report));
        output.push_str(&self.render_outcome(report));
        Ok(output)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
