// Mon Oct 19 2026 - Alex

pub struct BinaryUtils;

impl BinaryUtils {
    pub fn read_u8(data: &[u8], offset: usize) -> Option<u8> {
        data.get(offset).copied()
    }

    pub fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
        let bytes = data.get(offset..offset.checked_add(4)?)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Up to `len` bytes starting at `offset`, cut short at the end of `data`.
    pub fn read_window(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
        if offset >= data.len() {
            return None;
        }
        let end = offset.saturating_add(len).min(data.len());
        Some(&data[offset..end])
    }

    /// Decodes `bytes` as text, stopping at the first NUL when there is one.
    pub fn decode_cstring(bytes: &[u8]) -> String {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }
}
