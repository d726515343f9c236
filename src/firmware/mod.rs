// Mon Oct 19 2026 - Alex

pub mod signatures;
pub mod report;
pub mod agesa;
pub mod smu;
pub mod analyzer;

pub use analyzer::FirmwareAnalyzer;
pub use report::{AgesaVersion, FirmwareReport, SmuModule, SmuVersion};
