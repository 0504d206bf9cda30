//! Report export for draw sessions
//!
//! A [`DrawReport`] summarizes a validated session and, optionally, its draw.
//! Exporters render it as:
//! - plain text (console output)
//! - JSON (pretty-printed or compact)
//! - Markdown (shareable result page)
//!
//! # Example
//!
//! ```ignore
//! use gw_core::export::{DrawReport, ExportManager};
//!
//! let report = DrawReport::from_session(&session)?.with_outcome(outcome);
//! let text = ExportManager::new().export(&report, "text")?;
//! ```

mod exporter;
mod json;
mod markdown;
mod report;
mod text;

pub use exporter::{ExportManager, Exporter};
pub use json::JsonExporter;
pub use markdown::MarkdownExporter;
pub use report::DrawReport;
pub use text::TextExporter;
