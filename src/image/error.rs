// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("No eligible entry in archive {0}")]
    NoEligibleEntry(String),
    #[error("Image is empty: {0}")]
    Empty(String),
}
