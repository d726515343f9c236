// Mon Oct 19 2026 - Alex

use crate::pattern::{CompiledPattern, PatternError};
use log::trace;

/// Skip-search driver. The offset is added to every reported match position,
/// which lets a hit on an inner marker be reported relative to the structure
/// that surrounds it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternScanner {
    offset: isize,
}

impl PatternScanner {
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    pub fn with_offset(mut self, offset: isize) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> isize {
        self.offset
    }

    pub fn matches<'a>(&self, data: &'a [u8], pattern: &'a CompiledPattern) -> Result<Matches<'a>, PatternError> {
        if data.is_empty() {
            return Err(PatternError::InvalidInput("data is empty".to_string()));
        }
        if pattern.is_empty() {
            return Err(PatternError::InvalidInput("pattern is empty".to_string()));
        }

        Ok(Matches {
            data,
            pattern,
            position: pattern.last_index(),
        })
    }

    pub fn scan(&self, data: &[u8], pattern: &CompiledPattern) -> Result<Vec<isize>, PatternError> {
        let results: Vec<isize> = self.matches(data, pattern)?
            .map(|position| self.adjust(position))
            .collect();

        trace!("{} matches over {} bytes", results.len(), data.len());
        Ok(results)
    }

    pub fn scan_first(&self, data: &[u8], pattern: &CompiledPattern) -> Result<Option<isize>, PatternError> {
        Ok(self.matches(data, pattern)?.next().map(|position| self.adjust(position)))
    }

    fn adjust(&self, position: usize) -> isize {
        position as isize + self.offset
    }
}

/// Raw (unadjusted) match positions, in ascending order.
pub struct Matches<'a> {
    data: &'a [u8],
    pattern: &'a CompiledPattern,
    position: usize,
}

impl<'a> Iterator for Matches<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let last_index = self.pattern.last_index();

        while self.position < self.data.len() {
            let end = self.position;
            let start = end - last_index;
            let hit = self.pattern.matches_at(&self.data[start..=end]);

            self.position += self.pattern.skip(self.data[end]);

            if hit {
                return Some(start);
            }
        }

        None
    }
}
