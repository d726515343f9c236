// Mon Oct 19 2026 - Alex

use crate::firmware::report::{SmuModule, SmuVersion};
use crate::firmware::signatures::{
    SMU_HEADER_OFFSET, SMU_LENGTH_FIELD, SMU_MAJOR_FIELD, SMU_MINOR_FIELD, SMU_PATCH_FIELD,
};
use crate::pattern::{CompiledPattern, PatternError, PatternScanner};
use crate::utils::BinaryUtils;
use log::{debug, warn};

pub fn find_smu_modules(data: &[u8], signature: &CompiledPattern) -> Result<Vec<SmuModule>, PatternError> {
    let candidates = PatternScanner::new()
        .with_offset(SMU_HEADER_OFFSET)
        .scan(data, signature)?;

    debug!("{} SMU header candidates", candidates.len());

    Ok(candidates
        .into_iter()
        .filter_map(|header| decode_smu_module(data, header))
        .collect())
}

/// Reads the module header that starts at `header`. Headers that do not fit in
/// the image are skipped.
pub fn decode_smu_module(data: &[u8], header: isize) -> Option<SmuModule> {
    let Ok(start) = usize::try_from(header) else {
        warn!("SMU header tag too close to image start (header at {})", header);
        return None;
    };

    let fields = (
        BinaryUtils::read_u32_le(data, start + SMU_LENGTH_FIELD),
        BinaryUtils::read_u8(data, start + SMU_MAJOR_FIELD),
        BinaryUtils::read_u8(data, start + SMU_MINOR_FIELD),
        BinaryUtils::read_u8(data, start + SMU_PATCH_FIELD),
    );

    match fields {
        (Some(length), Some(major), Some(minor), Some(patch)) => {
            let module = SmuModule::new(start, length, SmuVersion::new(major, minor, patch));
            debug!("SMU {} at 0x{:08X}, {} bytes", module.version, module.start, module.length);
            Some(module)
        }
        _ => {
            warn!("SMU header at 0x{:08X} is truncated by the end of the image", start);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::signatures::SMU_SIGNATURE;
    use crate::pattern::PatternCompiler;

    const TAG: [u8; 6] = [0x24, 0x50, 0x53, 0x31, 0x00, 0x00];

    fn signature() -> CompiledPattern {
        PatternCompiler::new().compile(SMU_SIGNATURE).unwrap()
    }

    fn write_module(data: &mut [u8], header: usize, length: u32, version: (u8, u8, u8)) {
        data[header + 0x10..header + 0x16].copy_from_slice(&TAG);
        data[header + 0x60] = version.2;
        data[header + 0x61] = version.1;
        data[header + 0x62] = version.0;
        data[header + 0x6C..header + 0x70].copy_from_slice(&length.to_le_bytes());
    }

    #[test]
    fn test_decode_single_module() {
        let mut data = vec![0xEEu8; 512];
        write_module(&mut data, 34, 0x1000, (9, 1, 2));

        let modules = find_smu_modules(&data, &signature()).unwrap();
        assert_eq!(modules, vec![SmuModule::new(34, 4096, SmuVersion::new(9, 1, 2))]);
        assert_eq!(modules[0].end, 4130);
        assert_eq!(modules[0].version.to_string(), "9.1.2");
    }

    #[test]
    fn test_every_module_reported_in_order() {
        let mut data = vec![0u8; 0x1000];
        write_module(&mut data, 0x100, 0x20000, (46, 54, 0));
        write_module(&mut data, 0x800, 0x18000, (56, 40, 0));

        let modules = find_smu_modules(&data, &signature()).unwrap();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].start, 0x100);
        assert_eq!(modules[0].version, SmuVersion::new(46, 54, 0));
        assert_eq!(modules[1].start, 0x800);
        assert_eq!(modules[1].end, 0x800 + 0x18000);
    }

    #[test]
    fn test_tag_near_image_start_is_skipped() {
        let mut data = vec![0u8; 256];
        data[4..10].copy_from_slice(&TAG);
        assert!(find_smu_modules(&data, &signature()).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_header_is_skipped() {
        let mut data = vec![0u8; 0x70];
        write_module(&mut data, 0, 0x100, (1, 2, 3));
        let mut short = data.clone();
        short.truncate(0x6E);

        assert_eq!(find_smu_modules(&data, &signature()).unwrap().len(), 1);
        assert!(find_smu_modules(&short, &signature()).unwrap().is_empty());
    }

    #[test]
    fn test_no_modules() {
        let data = vec![0x24u8; 300];
        assert!(find_smu_modules(&data, &signature()).unwrap().is_empty());
    }
}
