// Wed Jan 15 2026 - Alex

pub mod map;
pub mod mapper;
pub mod names;

pub use map::{Opcode, OpcodeMap};
pub use mapper::{map_opcodes, slot_placeholder, DIAGNOSTIC_OPCODE_OFFSET, UNKNOWN_SLOT_NAME};
pub use names::IndexNameMap;
