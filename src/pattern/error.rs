// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Malformed pattern: {0}")]
    MalformedPattern(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
