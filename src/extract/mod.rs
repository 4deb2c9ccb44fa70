// Wed Jan 15 2026 - Alex

pub mod error;

pub use error::ExtractError;

use crate::config::{ExtractionMethod, OpcodeMapFile, VTableConfig};
use crate::dispatch::{MismatchPolicy, VTableDispatchDecoder};
use crate::memory::{ImageBuffer, ImageInfo};
use crate::opcode::{map_opcodes, OpcodeMap};
use crate::pattern::{find_unique, Pattern};

/// Runs scan → decode → map over one executable image.
#[derive(Debug, Clone, Default)]
pub struct OpcodeExtractor {
    dump_all: bool,
    policy: MismatchPolicy,
}

impl OpcodeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also record unnamed slots and the raw slot of every named handler.
    pub fn with_dump_all(mut self, dump_all: bool) -> Self {
        self.dump_all = dump_all;
        self
    }

    pub fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Extraction that never fails: any error is logged and yields an empty map.
    pub fn extract(&self, file: &OpcodeMapFile, image: &[u8]) -> OpcodeMap {
        match self.try_extract(file, image) {
            Ok(opcodes) => opcodes,
            Err(e) => {
                log::error!("{}", e);
                OpcodeMap::new()
            }
        }
    }

    pub fn try_extract(&self, file: &OpcodeMapFile, image: &[u8]) -> Result<OpcodeMap, ExtractError> {
        match file.method()? {
            ExtractionMethod::VTable => self.extract_vtable(&file.vtable_config()?, image),
            method @ ExtractionMethod::Other(_) => {
                log::info!("Method {} has no extractor, nothing to do", method);
                Ok(OpcodeMap::new())
            }
        }
    }

    pub fn extract_vtable(&self, config: &VTableConfig, image: &[u8]) -> Result<OpcodeMap, ExtractError> {
        let pattern = Pattern::from_hex(&config.signature)?;
        let offset = find_unique(image, &pattern)
            .map_err(|count| ExtractError::MatchCount { count })?;

        log::info!(
            "Signature ({} fixed, {} wildcard bytes) matched at {}",
            pattern.significant_byte_count(),
            pattern.wildcard_byte_count(),
            ImageInfo::parse(image).describe_offset(offset)
        );
        log::info!(
            "Scanning for opcode maps for {} opcodes, dumping all: {}",
            config.names.len(),
            self.dump_all
        );

        let entries = VTableDispatchDecoder::new(config.layout)
            .with_policy(self.policy)
            .decode(&ImageBuffer::new(image), offset)?;

        let unrecognised = entries.iter().filter(|entry| entry.slot.is_none()).count();
        if unrecognised > 0 {
            log::info!("{} of {} cases have an unrecognised handler shape", unrecognised, entries.len());
        }

        let opcodes = map_opcodes(&entries, &config.names, self.dump_all);
        log::info!("Mapped {} opcodes from {} cases", opcodes.len(), entries.len());

        Ok(opcodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::fixture::DispatchImage;
    use crate::dispatch::{DecodeError, StructuralLayout};

    const MARKER: [u8; 12] = [0x48, 0x89, 0x5C, 0x24, 0x08, 0x57, 0x48, 0x83, 0xEC, 0x20, 0x8B, 0xFA];
    const MARKER_OFFSET: usize = 20;

    const OPCODE_MAP: &str = r#"{
        "method": "vtable",
        // 12-byte prologue of the dispatch function
        "signature": ["48 89 5C 24 08 57", "48 83 EC ?? 8B FA"],
        "map": { "FooHandler": 1 }
    }"#;

    fn game_image() -> DispatchImage {
        DispatchImage::new(0x100)
            .put_bytes(MARKER_OFFSET, &MARKER)
            .header(MARKER_OFFSET, &StructuralLayout::legacy(), -2, 1, 0xF0, 0, 0x80)
            .table(0x80, 0, &[0xA0, 0xF0])
            .four_byte_case(0xA0, 24)
    }

    #[test]
    fn test_end_to_end() {
        let file = OpcodeMapFile::from_json(OPCODE_MAP).unwrap();
        let opcodes = OpcodeExtractor::new().extract(&file, &game_image().build());

        assert_eq!(opcodes.len(), 1);
        assert_eq!(opcodes.get(2), Some("FooHandler"));
    }

    #[test]
    fn test_end_to_end_dump_all() {
        let file = OpcodeMapFile::from_json(OPCODE_MAP).unwrap();
        let opcodes = OpcodeExtractor::new()
            .with_dump_all(true)
            .extract(&file, &game_image().build());

        assert_eq!(opcodes.sorted(), vec![(2, "FooHandler"), (0x10002, "Index_1")]);
    }

    #[test]
    fn test_ambiguous_signature_yields_empty_map() {
        let file = OpcodeMapFile::from_json(OPCODE_MAP).unwrap();
        let image = game_image().put_bytes(0xC0, &MARKER).build();
        let extractor = OpcodeExtractor::new();

        assert!(extractor.extract(&file, &image).is_empty());
        assert!(matches!(
            extractor.try_extract(&file, &image),
            Err(ExtractError::MatchCount { count: 2 })
        ));
    }

    #[test]
    fn test_missing_signature_match() {
        let file = OpcodeMapFile::from_json(OPCODE_MAP).unwrap();
        let image = vec![0u8; 0x100];

        assert!(matches!(
            OpcodeExtractor::new().try_extract(&file, &image),
            Err(ExtractError::MatchCount { count: 0 })
        ));
    }

    #[test]
    fn test_malformed_signature() {
        let file = OpcodeMapFile::from_json(r#"{"method": "vtable", "signature": "48 8X", "map": {}}"#).unwrap();

        assert!(matches!(
            OpcodeExtractor::new().try_extract(&file, &game_image().build()),
            Err(ExtractError::Pattern(_))
        ));
    }

    #[test]
    fn test_other_method_is_noop() {
        let file = OpcodeMapFile::from_json(r#"{"method": "opcode", "map": {"FooHandler": 1}}"#).unwrap();
        let opcodes = OpcodeExtractor::new().try_extract(&file, &game_image().build()).unwrap();

        assert!(opcodes.is_empty());
    }

    #[test]
    fn test_missing_map_aborts() {
        let file = OpcodeMapFile::from_json(r#"{"method": "vtable", "signature": "48 89"}"#).unwrap();

        assert!(matches!(
            OpcodeExtractor::new().try_extract(&file, &game_image().build()),
            Err(ExtractError::Config(_))
        ));
    }

    #[test]
    fn test_strict_count_mismatch() {
        let file = OpcodeMapFile::from_json(r#"{
            "method": "vtable",
            "signature": "48895C2408574883EC??8BFA",
            "map": { "FooHandler": 1 },
            "layout": {
                "switchTableOffsetOffset": 15,
                "switchTableCountOffset": 17,
                "defaultCaseAddrOffset": 23,
                "imageBaseOffsetOffset": 30,
                "switchTableDataOffsetOffset": 40,
                "expectedCount": 5
            }
        }"#).unwrap();
        let image = game_image().build();

        let lenient = OpcodeExtractor::new().extract(&file, &image);
        assert_eq!(lenient.get(2), Some("FooHandler"));

        let strict = OpcodeExtractor::new()
            .with_policy(MismatchPolicy::Strict)
            .try_extract(&file, &image);
        assert!(matches!(
            strict,
            Err(ExtractError::Decode(DecodeError::CountMismatch { expected: 5, actual: 1 }))
        ));
    }
}
