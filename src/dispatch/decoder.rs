// Wed Jan 15 2026 - Alex

use crate::dispatch::error::ReadContext;
use crate::dispatch::{DecodeError, MismatchPolicy, StructuralLayout};
use crate::memory::{resolve_displacement, ImageBuffer};

/// Jump-table entries are 32-bit image-relative offsets.
pub const JUMP_TABLE_ENTRY_SIZE: i64 = 4;

/// ModRM byte of the handler's indirect call when the vtable offset is a disp8.
pub const ONE_BYTE_SLOT_MODRM: u8 = 0x60;
/// ModRM byte of the handler's indirect call when the vtable offset is a disp32.
pub const FOUR_BYTE_SLOT_MODRM: u8 = 0xA0;

const SLOT_MODRM_OFFSET: usize = 9;
const SLOT_DISPLACEMENT_OFFSET: usize = 10;

pub const VTABLE_POINTER_SIZE: i32 = 8;
/// Constructor and destructor occupy the first two vtable slots.
pub const RESERVED_VTABLE_SLOTS: i32 = 2;

/// Switch metadata read from the dispatch function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchHeader {
    pub bias: i8,
    pub count: i32,
    pub default_case: i64,
    pub image_base: i64,
    pub table_data: i32,
}

impl SwitchHeader {
    pub fn table_start(&self) -> i64 {
        self.image_base + self.table_data as i64
    }

    pub fn entry_position(&self, index: i32) -> i64 {
        self.table_start() + index as i64 * JUMP_TABLE_ENTRY_SIZE
    }

    pub fn opcode_for(&self, index: i32) -> i64 {
        index as i64 - self.bias as i64
    }
}

/// One non-default case of the dispatch switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchEntry {
    pub table_index: i32,
    pub opcode: i64,
    pub target: i64,
    /// Handler vtable slot with reserved slots removed, `None` when the case
    /// body does not have a recognised shape.
    pub slot: Option<i32>,
}

/// Converts a vtable byte offset to a handler slot.
pub fn slot_from_byte_offset(byte_offset: i32) -> Option<i32> {
    if byte_offset % VTABLE_POINTER_SIZE != 0 {
        return None;
    }
    Some(byte_offset / VTABLE_POINTER_SIZE - RESERVED_VTABLE_SLOTS)
}

/// Reads the vtable slot called by the case body at `target`.
pub fn classify_case_body(image: &ImageBuffer<'_>, target: i64) -> Option<i32> {
    let body = match image.offset_of(target) {
        Ok(body) => body,
        Err(e) => {
            log::debug!("Case body at {} unreadable: {}", target, e);
            return None;
        }
    };

    let modrm_offset = body.saturating_add(SLOT_MODRM_OFFSET);
    let displacement_offset = body.saturating_add(SLOT_DISPLACEMENT_OFFSET);

    let byte_offset = match image.read_u8(modrm_offset) {
        Ok(ONE_BYTE_SLOT_MODRM) => image.read_u8(displacement_offset).map(i32::from),
        Ok(FOUR_BYTE_SLOT_MODRM) => image.read_i32(displacement_offset),
        Ok(other) => {
            log::debug!("Case body at 0x{:x} has unrecognised ModRM 0x{:02x}", body, other);
            return None;
        }
        Err(e) => Err(e),
    };

    match byte_offset {
        Ok(byte_offset) => {
            let slot = slot_from_byte_offset(byte_offset);
            if slot.is_none() {
                log::debug!("Case body at 0x{:x} calls unaligned vtable offset {}", body, byte_offset);
            }
            slot
        }
        Err(e) => {
            log::debug!("Case body at 0x{:x} truncated: {}", body, e);
            None
        }
    }
}

/// Walks the jump table of a vtable-dispatch switch and reports, per case,
/// the opcode and the handler slot it calls.
#[derive(Debug, Clone)]
pub struct VTableDispatchDecoder {
    layout: StructuralLayout,
    policy: MismatchPolicy,
}

impl VTableDispatchDecoder {
    pub fn new(layout: StructuralLayout) -> Self {
        Self {
            layout,
            policy: MismatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn layout(&self) -> &StructuralLayout {
        &self.layout
    }

    pub fn policy(&self) -> MismatchPolicy {
        self.policy
    }

    pub fn read_header(&self, image: &ImageBuffer<'_>, match_offset: usize) -> Result<SwitchHeader, DecodeError> {
        let at = |relative: usize| match_offset.saturating_add(relative);
        let layout = &self.layout;

        let bias = image.read_i8(at(layout.switch_table_offset_offset))
            .field("switchTableOffset")?;
        let count = image.read_i32(at(layout.switch_table_count_offset))
            .field("switchTableCount")?;
        let default_case = resolve_displacement(image, at(layout.default_case_addr_offset))
            .field("defaultCaseAddr")?;
        let image_base = resolve_displacement(image, at(layout.image_base_offset_offset))
            .field("imageBaseOffset")?;
        let table_data = image.read_i32(at(layout.switch_table_data_offset_offset))
            .field("switchTableDataOffset")?;

        Ok(SwitchHeader {
            bias,
            count,
            default_case,
            image_base,
            table_data,
        })
    }

    fn check_count(&self, header: &SwitchHeader) -> Result<(), DecodeError> {
        let Some(expected) = self.layout.expected_count else {
            return Ok(());
        };
        if expected == header.count {
            return Ok(());
        }

        match self.policy {
            MismatchPolicy::Strict => Err(DecodeError::CountMismatch {
                expected,
                actual: header.count,
            }),
            MismatchPolicy::Lenient => {
                log::warn!(
                    "Switch table count {} does not match expected {}; the signature or layout may have drifted, continuing",
                    header.count, expected
                );
                Ok(())
            }
        }
    }

    pub fn decode(&self, image: &ImageBuffer<'_>, match_offset: usize) -> Result<Vec<DispatchEntry>, DecodeError> {
        let header = self.read_header(image, match_offset)?;
        log::debug!("Switch header: {:?}", header);

        self.check_count(&header)?;

        if header.count < 0 {
            log::warn!("Negative switch table count {}, no cases decoded", header.count);
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for index in 0..=header.count {
            let relative = image.read_i32_at(header.entry_position(index))
                .field("jump table entry")?;
            let target = header.image_base + relative as i64;

            if target == header.default_case {
                continue;
            }

            let entry = DispatchEntry {
                table_index: index,
                opcode: header.opcode_for(index),
                target,
                slot: classify_case_body(image, target),
            };
            log::debug!("Case {} -> opcode 0x{:x} at 0x{:x}, slot {:?}", index, entry.opcode, target, entry.slot);
            entries.push(entry);
        }

        Ok(entries)
    }
}
