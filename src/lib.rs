// Tue Jan 15 2026 - Alex

pub mod config;
pub mod dispatch;
pub mod extract;
pub mod memory;
pub mod opcode;
pub mod output;
pub mod pattern;
pub mod ui;

pub use config::{OpcodeMapFile, VTableConfig};
pub use dispatch::{DispatchEntry, MismatchPolicy, StructuralLayout, VTableDispatchDecoder};
pub use extract::{ExtractError, OpcodeExtractor};
pub use memory::{ImageBuffer, MappedImage};
pub use opcode::{map_opcodes, IndexNameMap, OpcodeMap};
pub use pattern::{scan, Pattern};
