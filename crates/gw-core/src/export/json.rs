//! JSON exporter for draw reports

use super::exporter::Exporter;
use super::report::DrawReport;
use crate::error::Result;

/// JSON exporter
pub struct JsonExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
}

impl JsonExporter {
    /// Create a pretty-printed JSON exporter
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a single-line JSON exporter
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn export(&self, report: &DrawReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        "json"
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
