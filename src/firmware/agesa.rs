// Mon Oct 19 2026 - Alex

use crate::firmware::report::AgesaVersion;
use crate::firmware::signatures::{AGESA_VERSION_OFFSET, AGESA_VERSION_WINDOW};
use crate::pattern::{CompiledPattern, PatternError, PatternScanner};
use crate::utils::BinaryUtils;
use log::debug;

/// Only the first occurrence of the marker carries the version.
pub fn find_agesa_version(data: &[u8], signature: &CompiledPattern) -> Result<Option<AgesaVersion>, PatternError> {
    let scanner = PatternScanner::new().with_offset(AGESA_VERSION_OFFSET);

    let Some(position) = scanner.scan_first(data, signature)? else {
        debug!("AGESA marker not present");
        return Ok(None);
    };

    Ok(decode_agesa_version(data, position))
}

pub fn decode_agesa_version(data: &[u8], position: isize) -> Option<AgesaVersion> {
    let start = usize::try_from(position).ok()?;

    match BinaryUtils::read_window(data, start, AGESA_VERSION_WINDOW) {
        Some(window) => {
            let text = BinaryUtils::decode_cstring(window);
            debug!("AGESA version at 0x{:X}: {}", start, text);
            Some(AgesaVersion(text))
        }
        None => {
            debug!("AGESA version at 0x{:X} lies past the end of the image", start);
            None
        }
    }
}
