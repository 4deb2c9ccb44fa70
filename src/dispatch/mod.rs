// Wed Jan 15 2026 - Alex

pub mod decoder;
pub mod error;
pub mod layout;

#[cfg(test)]
pub(crate) mod fixture;

pub use decoder::{classify_case_body, slot_from_byte_offset, DispatchEntry, SwitchHeader, VTableDispatchDecoder};
pub use error::DecodeError;
pub use layout::{MismatchPolicy, StructuralLayout};
