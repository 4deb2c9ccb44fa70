// Wed Jan 15 2026 - Alex

use goblin::Object;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Pe,
    Elf,
    MachO,
    Raw,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pe => write!(f, "PE"),
            Self::Elf => write!(f, "ELF"),
            Self::MachO => write!(f, "Mach-O"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

/// File-backed section of an executable image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSection {
    pub name: String,
    pub file_offset: u64,
    pub file_size: u64,
}

impl ImageSection {
    pub fn contains(&self, offset: u64) -> bool {
        offset >= self.file_offset && offset - self.file_offset < self.file_size
    }
}

/// Container-level description of an image, only used for diagnostics.
/// Decoding works on raw file offsets and never depends on it.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub sections: Vec<ImageSection>,
}

impl ImageInfo {
    pub fn parse(data: &[u8]) -> Self {
        match Object::parse(data) {
            Ok(Object::PE(pe)) => {
                let sections = pe.sections.iter()
                    .map(|section| ImageSection {
                        name: section.name().unwrap_or("").to_string(),
                        file_offset: section.pointer_to_raw_data as u64,
                        file_size: section.size_of_raw_data as u64,
                    })
                    .collect();
                Self { format: ImageFormat::Pe, sections }
            }
            Ok(Object::Elf(elf)) => {
                let sections = elf.section_headers.iter()
                    .filter(|header| header.sh_size > 0)
                    .map(|header| ImageSection {
                        name: elf.shdr_strtab.get_at(header.sh_name).unwrap_or("").to_string(),
                        file_offset: header.sh_offset,
                        file_size: header.sh_size,
                    })
                    .collect();
                Self { format: ImageFormat::Elf, sections }
            }
            Ok(Object::Mach(_)) => Self { format: ImageFormat::MachO, sections: Vec::new() },
            Ok(_) => Self::raw(),
            Err(e) => {
                log::debug!("Image container not recognised, treating as raw bytes: {}", e);
                Self::raw()
            }
        }
    }

    pub fn raw() -> Self {
        Self { format: ImageFormat::Raw, sections: Vec::new() }
    }

    pub fn section_containing(&self, offset: usize) -> Option<&ImageSection> {
        self.sections.iter().find(|section| section.contains(offset as u64))
    }

    pub fn describe_offset(&self, offset: usize) -> String {
        match self.section_containing(offset) {
            Some(section) => format!("0x{:x} ({} {}+0x{:x})",
                offset, self.format, section.name, offset as u64 - section.file_offset),
            None => format!("0x{:x} ({})", offset, self.format),
        }
    }
}
