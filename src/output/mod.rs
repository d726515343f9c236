// Mon Oct 19 2026 - Alex

pub mod formatter;
pub mod console;
pub mod json;

pub use console::ConsoleRenderer;
pub use formatter::OutputFormatter;
pub use json::JsonSerializer;

use crate::firmware::FirmwareReport;
use serde::Serialize;

/// Analysis result for one input, as handed to the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReport {
    pub name: String,
    pub size: usize,
    #[serde(flatten)]
    pub report: FirmwareReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ImageOutcome {
    Analyzed(ImageReport),
    Failed { source: String, error: String },
}
