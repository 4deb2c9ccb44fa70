// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Out of range: {len} bytes at offset 0x{offset:x} exceed image size 0x{size:x}")]
    OutOfRange { offset: usize, len: usize, size: usize },
    #[error("Negative image position: {0}")]
    NegativeOffset(i64),
}
