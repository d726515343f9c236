// Mon Oct 19 2026 - Alex

use crate::image::filter::{entry_file_name, EntryFilter};
use crate::image::ImageError;
use log::{debug, info};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

enum ImageData {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// A BIOS image held in memory together with the name it is shown under.
pub struct FirmwareImage {
    name: String,
    data: ImageData,
}

impl FirmwareImage {
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            data: ImageData::Owned(bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.data {
            ImageData::Mapped(mmap) => mmap.as_ref(),
            ImageData::Owned(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AsRef<[u8]> for FirmwareImage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

pub struct ImageLoader {
    filter: EntryFilter,
}

impl ImageLoader {
    pub fn new(filter: EntryFilter) -> Self {
        Self { filter }
    }

    pub fn load(&self, path: &Path) -> Result<FirmwareImage, ImageError> {
        if is_archive(path) {
            self.load_archive(path)
        } else {
            self.load_file(path)
        }
    }

    pub fn load_file(&self, path: &Path) -> Result<FirmwareImage, ImageError> {
        let name = display_name(path);
        let file = File::open(path)?;

        if file.metadata()?.len() == 0 {
            return Err(ImageError::Empty(name));
        }

        let mmap = unsafe { Mmap::map(&file) }?;
        debug!("Mapped {} ({} bytes)", path.display(), mmap.len());

        Ok(FirmwareImage {
            name,
            data: ImageData::Mapped(mmap),
        })
    }

    /// Extracts the first entry the filter accepts.
    pub fn load_archive(&self, path: &Path) -> Result<FirmwareImage, ImageError> {
        let mut archive = ZipArchive::new(File::open(path)?)?;

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;

            if !self.filter.is_eligible(entry.name()) {
                debug!("Skipping archive entry {}", entry.name());
                continue;
            }

            let name = entry_file_name(entry.name()).to_string();
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;

            if bytes.is_empty() {
                return Err(ImageError::Empty(name));
            }

            info!("Extracted {} ({} bytes) from {}", name, bytes.len(), path.display());
            return Ok(FirmwareImage::from_bytes(&name, bytes));
        }

        Err(ImageError::NoEligibleEntry(path.display().to_string()))
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new(EntryFilter::default())
    }
}

pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("zip"))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
