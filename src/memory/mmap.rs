// Tue Jan 13 2026 - Alex

use crate::memory::MemoryError;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Executable image mapped read-only for the lifetime of one extraction.
pub struct MappedImage {
    mmap: Mmap,
    path: PathBuf,
}

impl MappedImage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let file = File::open(path.as_ref())?;
        // The mapping is never written through and the file is opened read-only.
        let mmap = unsafe { Mmap::map(&file) }?;
        Ok(Self {
            mmap,
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> usize {
        self.mmap.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_ref()
    }
}
