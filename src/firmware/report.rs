// Mon Oct 19 2026 - Alex

use serde::{Serialize, Serializer};
use std::fmt;

/// AGESA version text as embedded in the image, e.g. `AGESA!V9ComboAm4v2PI 1.2.0.7`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AgesaVersion(pub String);

impl AgesaVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgesaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmuVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl SmuVersion {
    pub fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self { major, minor, patch }
    }
}

impl fmt::Display for SmuVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for SmuVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmuModule {
    pub start: usize,
    pub length: u32,
    pub version: SmuVersion,
    pub end: usize,
}

impl SmuModule {
    pub fn new(start: usize, length: u32, version: SmuVersion) -> Self {
        Self {
            start,
            length,
            version,
            end: start.saturating_add(length as usize),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FirmwareReport {
    pub agesa: Option<AgesaVersion>,
    pub smu_modules: Vec<SmuModule>,
}

impl FirmwareReport {
    pub fn is_empty(&self) -> bool {
        self.agesa.is_none() && self.smu_modules.is_empty()
    }
}
