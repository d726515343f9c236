// Mon Oct 19 2026 - Alex

//! Binary layout contracts for the two firmware markers.

/// Bytes that precede the AGESA version text.
pub const AGESA_SIGNATURE: &str = "3D 9B 25 70 41 47 45 53 41";
/// Distance from the signature to the first character of the version text.
pub const AGESA_VERSION_OFFSET: isize = 0x0D;
pub const AGESA_VERSION_WINDOW: usize = 255;

/// `$PS1` header tag inside every SMU firmware module.
pub const SMU_SIGNATURE: &str = "24 50 53 31 00 00";
/// The tag sits this far into the module header.
pub const SMU_HEADER_OFFSET: isize = -0x10;
pub const SMU_PATCH_FIELD: usize = 0x60;
pub const SMU_MINOR_FIELD: usize = 0x61;
pub const SMU_MAJOR_FIELD: usize = 0x62;
pub const SMU_LENGTH_FIELD: usize = 0x6C;
