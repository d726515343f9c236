// Mon Oct 19 2026 - Alex

pub mod pattern;
pub mod compiler;
pub mod scanner;
pub mod error;

pub use pattern::{Pattern, PatternToken};
pub use compiler::{CompiledPattern, PatternCompiler};
pub use scanner::{Matches, PatternScanner};
pub use error::PatternError;

/// Compiles `source` and returns every match in `data`, shifted by `offset`.
pub fn scan_for_pattern(data: &[u8], source: &str, offset: isize) -> Result<Vec<isize>, PatternError> {
    let compiled = PatternCompiler::new().compile(source)?;
    PatternScanner::new().with_offset(offset).scan(data, &compiled)
}
