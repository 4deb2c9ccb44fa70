// Wed Jan 15 2026 - Alex

use crate::memory::MemoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to read {field}: {source}")]
    Read {
        field: &'static str,
        #[source]
        source: MemoryError,
    },
    #[error("Switch table count mismatch: expected {expected}, found {actual}")]
    CountMismatch { expected: i32, actual: i32 },
}

pub(crate) trait ReadContext<T> {
    fn field(self, field: &'static str) -> Result<T, DecodeError>;
}

impl<T> ReadContext<T> for Result<T, MemoryError> {
    fn field(self, field: &'static str) -> Result<T, DecodeError> {
        self.map_err(|source| DecodeError::Read { field, source })
    }
}
