// Mon Oct 19 2026 - Alex

use crate::pattern::PatternError;
use std::fmt;
use std::str::FromStr;

/// A single pattern position: a concrete byte, or a wildcard that matches anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternToken {
    pub value: u8,
    pub wildcard: bool,
}

impl PatternToken {
    pub fn byte(value: u8) -> Self {
        Self { value, wildcard: false }
    }

    pub fn wildcard() -> Self {
        Self { value: 0, wildcard: true }
    }

    pub fn matches(&self, byte: u8) -> bool {
        self.wildcard || self.value == byte
    }

    fn parse(token: &str) -> Result<Self, PatternError> {
        if token == "?" || token == "??" {
            return Ok(Self::wildcard());
        }

        if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PatternError::MalformedPattern(format!("invalid token '{}'", token)));
        }

        u8::from_str_radix(token, 16)
            .map(Self::byte)
            .map_err(|_| PatternError::MalformedPattern(format!("invalid token '{}'", token)))
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wildcard {
            write!(f, "??")
        } else {
            write!(f, "{:02X}", self.value)
        }
    }
}

/// Ordered, non-empty sequence of pattern tokens, written as `"AA ?? CC"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
}

impl Pattern {
    pub fn new(tokens: Vec<PatternToken>) -> Result<Self, PatternError> {
        if tokens.is_empty() {
            return Err(PatternError::MalformedPattern("pattern is empty".to_string()));
        }
        Ok(Self { tokens })
    }

    pub fn from_hex(source: &str) -> Result<Self, PatternError> {
        let tokens = source
            .split_whitespace()
            .map(PatternToken::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tokens)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PatternError> {
        Self::new(bytes.iter().copied().map(PatternToken::byte).collect())
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last_wildcard(&self) -> Option<usize> {
        self.tokens.iter().rposition(|t| t.wildcard)
    }

    /// Checks the pattern against the start of `data` without any skip heuristic.
    pub fn matches(&self, data: &[u8]) -> bool {
        data.len() >= self.tokens.len()
            && self.tokens.iter().zip(data).all(|(token, &byte)| token.matches(byte))
    }

    pub fn to_hex_string(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
