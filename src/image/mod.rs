// Mon Oct 19 2026 - Alex

pub mod error;
pub mod filter;
pub mod loader;

pub use error::ImageError;
pub use filter::EntryFilter;
pub use loader::{FirmwareImage, ImageLoader};
