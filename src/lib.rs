// Mon Oct 19 2026 - Alex

pub mod config;
pub mod pattern;
pub mod firmware;
pub mod image;
pub mod output;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use firmware::{FirmwareAnalyzer, FirmwareReport};
pub use image::{FirmwareImage, ImageLoader};
pub use pattern::{CompiledPattern, PatternCompiler, PatternScanner};
