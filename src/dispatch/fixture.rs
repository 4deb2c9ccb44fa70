// Wed Jan 15 2026 - Alex

use crate::dispatch::decoder::{FOUR_BYTE_SLOT_MODRM, ONE_BYTE_SLOT_MODRM};
use crate::dispatch::StructuralLayout;

/// Builds synthetic images containing a vtable-dispatch switch.
pub struct DispatchImage {
    data: Vec<u8>,
}

impl DispatchImage {
    pub fn new(size: usize) -> Self {
        Self { data: vec![0xCC; size] }
    }

    pub fn put_u8(mut self, at: usize, value: u8) -> Self {
        self.data[at] = value;
        self
    }

    pub fn put_i32(mut self, at: usize, value: i32) -> Self {
        self.data[at..at + 4].copy_from_slice(&value.to_le_bytes());
        self
    }

    pub fn put_bytes(mut self, at: usize, bytes: &[u8]) -> Self {
        self.data[at..at + bytes.len()].copy_from_slice(bytes);
        self
    }

    /// Writes switch metadata so that decoding at `match_offset` with
    /// `layout` yields the given values.
    #[allow(clippy::too_many_arguments)]
    pub fn header(
        self,
        match_offset: usize,
        layout: &StructuralLayout,
        bias: i8,
        count: i32,
        default_case: i64,
        image_base: i64,
        table_data: i32,
    ) -> Self {
        let default_field = match_offset + layout.default_case_addr_offset;
        let base_field = match_offset + layout.image_base_offset_offset;

        self.put_u8(match_offset + layout.switch_table_offset_offset, bias as u8)
            .put_i32(match_offset + layout.switch_table_count_offset, count)
            .put_i32(default_field, (default_case - default_field as i64 - 4) as i32)
            .put_i32(base_field, (image_base - base_field as i64 - 4) as i32)
            .put_i32(match_offset + layout.switch_table_data_offset_offset, table_data)
    }

    /// Writes jump-table entries at `table_start` pointing at `targets`.
    pub fn table(mut self, table_start: i64, image_base: i64, targets: &[i64]) -> Self {
        for (i, &target) in targets.iter().enumerate() {
            self = self.put_i32(table_start as usize + i * 4, (target - image_base) as i32);
        }
        self
    }

    pub fn one_byte_case(self, target: i64, vtable_offset: u8) -> Self {
        let body = target as usize;
        self.put_u8(body + 9, ONE_BYTE_SLOT_MODRM)
            .put_u8(body + 10, vtable_offset)
    }

    pub fn four_byte_case(self, target: i64, vtable_offset: i32) -> Self {
        let body = target as usize;
        self.put_u8(body + 9, FOUR_BYTE_SLOT_MODRM)
            .put_i32(body + 10, vtable_offset)
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}
