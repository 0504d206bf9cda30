//! Exporter trait and manager

use super::report::DrawReport;
use crate::error::{GiveawayError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Trait for report exporters
pub trait Exporter: Send + Sync {
    /// Render a report to string
    fn export(&self, report: &DrawReport) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple report formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
        };

        manager.register(Box::new(super::text::TextExporter::new()));
        manager.register(Box::new(super::json::JsonExporter::new()));
        manager.register(Box::new(super::markdown::MarkdownExporter::new()));

        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    fn exporter(&self, format: &str) -> Result<&dyn Exporter> {
        self.exporters
            .get(format)
            .map(|e| e.as_ref())
            .ok_or_else(|| GiveawayError::UnknownFormat(format.to_string()))
    }

    /// Render a report in the specified format
    pub fn export(&self, report: &DrawReport, format: &str) -> Result<String> {
        self.exporter(format)?.export(report)
    }

    /// Render a report to a file, returning the path written
    ///
    /// The format's extension is added when `path` has none.
    pub fn export_to_file(&self, report: &DrawReport, format: &str, path: &Path) -> Result<PathBuf> {
        let exporter = self.exporter(format)?;
        let content = exporter.export(report)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(exporter.file_extension())
        };

        // Atomic write using a temp file next to the target
        let mut temp_name = final_path.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".tmp");
        let temp_path = final_path.with_file_name(temp_name);
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
        }

        fs::rename(&temp_path, &final_path)?;
        tracing::debug!("Wrote {} report to {:?}", format, final_path);
        Ok(final_path)
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
