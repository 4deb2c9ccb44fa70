// Wed Jan 15 2026 - Alex

use serde::{Deserialize, Serialize};

/// Byte offsets, relative to the signature match, of the switch metadata
/// inside the dispatch function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StructuralLayout {
    /// Signed one-byte bias subtracted from the table index to get the opcode.
    pub switch_table_offset_offset: usize,
    /// Four-byte highest table index.
    pub switch_table_count_offset: usize,
    /// Displacement field whose target is the default case.
    pub default_case_addr_offset: usize,
    /// Displacement field whose target is the image base.
    pub image_base_offset_offset: usize,
    /// Four-byte image-relative start of the jump table.
    pub switch_table_data_offset_offset: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_count: Option<i32>,
}

impl StructuralLayout {
    pub const fn legacy() -> Self {
        Self {
            switch_table_offset_offset: 15,
            switch_table_count_offset: 17,
            default_case_addr_offset: 23,
            image_base_offset_offset: 30,
            switch_table_data_offset_offset: 40,
            expected_count: None,
        }
    }

    pub fn with_expected_count(mut self, count: i32) -> Self {
        self.expected_count = Some(count);
        self
    }
}

impl Default for StructuralLayout {
    fn default() -> Self {
        Self::legacy()
    }
}

/// What to do when the decoded switch count differs from `expected_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    #[default]
    Lenient,
    Strict,
}
