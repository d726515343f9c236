// Mon Oct 19 2026 - Alex

/// Decides which archive entries can hold a BIOS image. Directories and
/// entries whose name ends in a blacklisted suffix are skipped.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    blacklist: Vec<String>,
}

impl EntryFilter {
    pub fn new(blacklist: Vec<String>) -> Self {
        Self { blacklist }
    }

    pub fn blacklist(&self) -> &[String] {
        &self.blacklist
    }

    pub fn is_eligible(&self, entry_path: &str) -> bool {
        let name = entry_file_name(entry_path);
        !name.is_empty() && !self.blacklist.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self::new(default_blacklist())
    }
}

pub fn default_blacklist() -> Vec<String> {
    ["/", ".txt", ".ini", ".bat", ".exe"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// File name part of an archive path; empty for directories.
pub fn entry_file_name(entry_path: &str) -> &str {
    entry_path.rsplit('/').next().unwrap_or(entry_path)
}
