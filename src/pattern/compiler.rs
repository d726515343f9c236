// Mon Oct 19 2026 - Alex

use crate::pattern::{Pattern, PatternError, PatternToken};

pub const SKIP_TABLE_SIZE: usize = 256;

pub struct PatternCompiler;

impl PatternCompiler {
    pub fn new() -> Self {
        Self
    }

    pub fn compile(&self, source: &str) -> Result<CompiledPattern, PatternError> {
        let pattern = Pattern::from_hex(source.trim())?;
        Ok(self.compile_pattern(&pattern))
    }

    pub fn compile_pattern(&self, pattern: &Pattern) -> CompiledPattern {
        let tokens = pattern.tokens().to_vec();
        let last_index = tokens.len() - 1;
        let skip_table = Self::build_skip_table(pattern, last_index);

        CompiledPattern {
            tokens,
            skip_table,
            last_index,
        }
    }

    /// Horspool-style table that tolerates wildcards. A wildcard can match any
    /// byte, so no shift may carry the last wildcard past the probed position.
    /// Only the concrete run after the last wildcard can shorten a shift.
    fn build_skip_table(pattern: &Pattern, last_index: usize) -> [usize; SKIP_TABLE_SIZE] {
        let last_wildcard = pattern.last_wildcard();
        let diff = (last_index - last_wildcard.unwrap_or(0)).max(1);
        let mut table = [diff; SKIP_TABLE_SIZE];

        let run_start = last_wildcard.map_or(0, |w| w + 1);
        for (index, token) in pattern.tokens().iter().enumerate().take(last_index).skip(run_start) {
            if !token.wildcard {
                table[token.value as usize] = last_index - index;
            }
        }

        table
    }
}

impl Default for PatternCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable matcher built by [`PatternCompiler`]; safe to share between threads.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    tokens: Vec<PatternToken>,
    skip_table: [usize; SKIP_TABLE_SIZE],
    last_index: usize,
}

impl CompiledPattern {
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn skip_table(&self) -> &[usize; SKIP_TABLE_SIZE] {
        &self.skip_table
    }

    pub fn skip(&self, byte: u8) -> usize {
        self.skip_table[byte as usize].max(1)
    }

    /// Compares the pattern right to left against `window`, which must be
    /// exactly as long as the pattern.
    pub fn matches_at(&self, window: &[u8]) -> bool {
        self.tokens
            .iter()
            .zip(window)
            .rev()
            .all(|(token, &byte)| token.matches(byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(source: &str) -> CompiledPattern {
        PatternCompiler::new().compile(source).unwrap()
    }

    #[test]
    fn test_skip_table_without_wildcards() {
        let compiled = compile("11 22 33 44");
        let table = compiled.skip_table();

        assert_eq!(compiled.last_index(), 3);
        assert_eq!(table[0x11], 3);
        assert_eq!(table[0x22], 2);
        assert_eq!(table[0x33], 1);
        // the final byte never shortens the shift
        assert_eq!(table[0x44], 3);
        assert_eq!(table[0x00], 3);
    }

    #[test]
    fn test_skip_table_later_occurrence_wins() {
        let compiled = compile("AA BB AA CC");
        assert_eq!(compiled.skip_table()[0xAA], 1);
        assert_eq!(compiled.skip_table()[0xBB], 2);
    }

    #[test]
    fn test_skip_table_with_wildcard() {
        let compiled = compile("11 ?? 22 33 44");
        let table = compiled.skip_table();

        // bytes before the wildcard are ignored, default shift stops at the wildcard
        assert_eq!(table[0x11], 3);
        assert_eq!(table[0x22], 2);
        assert_eq!(table[0x33], 1);
        assert_eq!(table[0xFF], 3);
    }

    #[test]
    fn test_skip_table_trailing_wildcard() {
        let compiled = compile("11 22 ??");
        assert!(compiled.skip_table().iter().all(|&s| s == 1));
    }

    #[test]
    fn test_single_token_pattern() {
        let compiled = compile("AB");
        assert_eq!(compiled.last_index(), 0);
        assert!(compiled.skip_table().iter().all(|&s| s == 1));
    }

    #[test]
    fn test_skip_entries_always_positive() {
        for source in ["00", "??", "00 00 00", "?? 00", "AA ?? CC", "24 50 53 31 00 00", "?? ?? ??"] {
            let compiled = compile(source);
            assert!(compiled.skip_table().iter().all(|&s| s >= 1), "{}", source);
        }
    }

    #[test]
    fn test_compile_rejects_malformed() {
        let compiler = PatternCompiler::new();
        assert!(matches!(compiler.compile(""), Err(PatternError::MalformedPattern(_))));
        assert!(matches!(compiler.compile("AA XY"), Err(PatternError::MalformedPattern(_))));
    }

    #[test]
    fn test_matches_at() {
        let compiled = compile("AA ?? CC");
        assert!(compiled.matches_at(&[0xAA, 0x00, 0xCC]));
        assert!(compiled.matches_at(&[0xAA, 0xFF, 0xCC]));
        assert!(!compiled.matches_at(&[0xAB, 0xFF, 0xCC]));
    }
}
