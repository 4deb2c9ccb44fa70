// Wed Jan 15 2026 - Alex

use crate::memory::{ImageBuffer, MemoryError};

/// Width of an encoded 32-bit displacement field.
pub const DISPLACEMENT_SIZE: i64 = 4;

/// Reads the raw little-endian displacement stored at `offset`.
pub fn read_displacement(image: &ImageBuffer<'_>, offset: usize) -> Result<i32, MemoryError> {
    image.read_i32(offset)
}

/// Distance from the displacement field to its target: the field length plus
/// the stored value, since references are relative to the following byte.
pub fn displacement_span(image: &ImageBuffer<'_>, offset: usize) -> Result<i64, MemoryError> {
    Ok(DISPLACEMENT_SIZE + read_displacement(image, offset)? as i64)
}

/// Absolute image position referenced by the displacement at `offset`.
pub fn resolve_displacement(image: &ImageBuffer<'_>, offset: usize) -> Result<i64, MemoryError> {
    Ok(offset as i64 + displacement_span(image, offset)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_displacement() {
        let mut data = vec![0u8; 32];
        data[4..8].copy_from_slice(&0x10i32.to_le_bytes());
        let image = ImageBuffer::new(&data);

        assert_eq!(read_displacement(&image, 4).unwrap(), 0x10);
        assert_eq!(displacement_span(&image, 4).unwrap(), 0x14);
        assert_eq!(resolve_displacement(&image, 4).unwrap(), 4 + 4 + 0x10);
    }

    #[test]
    fn test_backward_displacement() {
        let mut data = vec![0u8; 32];
        data[20..24].copy_from_slice(&(-24i32).to_le_bytes());
        let image = ImageBuffer::new(&data);

        assert_eq!(read_displacement(&image, 20).unwrap(), -24);
        assert_eq!(resolve_displacement(&image, 20).unwrap(), 0);
    }

    #[test]
    fn test_truncated_field() {
        let data = [0u8; 6];
        let image = ImageBuffer::new(&data);

        assert!(resolve_displacement(&image, 2).is_ok());
        assert!(matches!(
            resolve_displacement(&image, 3),
            Err(MemoryError::OutOfRange { .. })
        ));
    }
}
