// Mon Oct 19 2026 - Alex

use crate::firmware::agesa::find_agesa_version;
use crate::firmware::report::{AgesaVersion, FirmwareReport, SmuModule};
use crate::firmware::signatures::{AGESA_SIGNATURE, SMU_SIGNATURE};
use crate::firmware::smu::find_smu_modules;
use crate::pattern::{CompiledPattern, PatternCompiler, PatternError};
use log::debug;

/// Holds the two compiled signatures for one run. Immutable, so a single
/// analyzer can serve images on several threads.
pub struct FirmwareAnalyzer {
    agesa: CompiledPattern,
    smu: CompiledPattern,
}

impl FirmwareAnalyzer {
    pub fn new() -> Result<Self, PatternError> {
        let compiler = PatternCompiler::new();
        Ok(Self {
            agesa: compiler.compile(AGESA_SIGNATURE)?,
            smu: compiler.compile(SMU_SIGNATURE)?,
        })
    }

    pub fn analyze(&self, data: &[u8]) -> Result<FirmwareReport, PatternError> {
        debug!("Analyzing {} bytes", data.len());

        Ok(FirmwareReport {
            agesa: self.agesa_version(data)?,
            smu_modules: self.smu_modules(data)?,
        })
    }

    pub fn agesa_version(&self, data: &[u8]) -> Result<Option<AgesaVersion>, PatternError> {
        find_agesa_version(data, &self.agesa)
    }

    pub fn smu_modules(&self, data: &[u8]) -> Result<Vec<SmuModule>, PatternError> {
        find_smu_modules(data, &self.smu)
    }
}
