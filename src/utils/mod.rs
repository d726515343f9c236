// Mon Oct 19 2026 - Alex

pub mod binary;

pub use binary::BinaryUtils;
