// Wed Jan 15 2026 - Alex

use crate::dispatch::DispatchEntry;
use crate::opcode::{IndexNameMap, Opcode, OpcodeMap};

/// Added to an opcode to file the raw slot of a named handler alongside it.
pub const DIAGNOSTIC_OPCODE_OFFSET: Opcode = 0x10000;

pub const UNKNOWN_SLOT_NAME: &str = "Index_unknown";

pub fn slot_placeholder(slot: i32) -> String {
    format!("Index_{}", slot)
}

/// Resolves decoded cases against `names`.
///
/// With `dump_all` every case is recorded: unnamed slots as `Index_<slot>`,
/// and each named case additionally as `opcode + 0x10000 → Index_<slot>`.
/// Cases whose handler shape is not recognised are recorded as
/// [`UNKNOWN_SLOT_NAME`] (`Index_unknown`), not `Index_-1`, so they cannot be
/// confused with a decoded slot of -1.
/// Without it only named cases are recorded. Later cases overwrite earlier
/// ones with the same opcode.
pub fn map_opcodes(entries: &[DispatchEntry], names: &IndexNameMap, dump_all: bool) -> OpcodeMap {
    let mut opcodes = OpcodeMap::new();

    for entry in entries {
        let Some(slot) = entry.slot else {
            if dump_all {
                opcodes.record(entry.opcode, UNKNOWN_SLOT_NAME);
            }
            continue;
        };

        match names.get(slot) {
            Some(name) => {
                opcodes.record(entry.opcode, name);
                if dump_all {
                    opcodes.record(entry.opcode + DIAGNOSTIC_OPCODE_OFFSET, slot_placeholder(slot));
                }
            }
            None if dump_all => {
                opcodes.record(entry.opcode, slot_placeholder(slot));
            }
            None => {}
        }
    }

    opcodes
}
