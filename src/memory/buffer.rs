// Tue Jan 13 2026 - Alex

use crate::memory::MemoryError;

/// Read-only view over a loaded executable image.
///
/// Every multi-byte read checks the remaining length first and fails with
/// [`MemoryError::OutOfRange`] instead of reading past the end.
#[derive(Debug, Clone, Copy)]
pub struct ImageBuffer<'a> {
    data: &'a [u8],
}

impl<'a> ImageBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Converts a signed image position into a buffer offset.
    pub fn offset_of(&self, position: i64) -> Result<usize, MemoryError> {
        if position < 0 {
            return Err(MemoryError::NegativeOffset(position));
        }
        let offset = usize::try_from(position).map_err(|_| MemoryError::NegativeOffset(position))?;
        if offset > self.data.len() {
            return Err(MemoryError::OutOfRange { offset, len: 0, size: self.data.len() });
        }
        Ok(offset)
    }

    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], MemoryError> {
        let end = offset.checked_add(len).filter(|&end| end <= self.data.len());
        match end {
            Some(end) => Ok(&self.data[offset..end]),
            None => Err(MemoryError::OutOfRange { offset, len, size: self.data.len() }),
        }
    }

    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], MemoryError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(offset, N)?);
        Ok(out)
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, MemoryError> {
        Ok(self.read_array::<1>(offset)?[0])
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, MemoryError> {
        Ok(i8::from_le_bytes(self.read_array(offset)?))
    }

    pub fn read_i32(&self, offset: usize) -> Result<i32, MemoryError> {
        Ok(i32::from_le_bytes(self.read_array(offset)?))
    }

    /// Reads a little-endian `i32` at a signed image position.
    pub fn read_i32_at(&self, position: i64) -> Result<i32, MemoryError> {
        self.read_i32(self.offset_of(position)?)
    }
}

impl<'a> From<&'a [u8]> for ImageBuffer<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_reads() {
        let data = [0xFE, 0x78, 0x56, 0x34, 0x12, 0xFF];
        let image = ImageBuffer::new(&data);

        assert_eq!(image.read_u8(0).unwrap(), 0xFE);
        assert_eq!(image.read_i8(0).unwrap(), -2);
        assert_eq!(image.read_i32(1).unwrap(), 0x12345678);
        assert_eq!(image.read_i32(2).unwrap(), i32::from_le_bytes([0x56, 0x34, 0x12, 0xFF]));
    }

    #[test]
    fn test_read_past_end_fails() {
        let data = [0u8; 8];
        let image = ImageBuffer::new(&data);

        assert!(image.read_i32(4).is_ok());
        assert!(matches!(
            image.read_i32(5),
            Err(MemoryError::OutOfRange { offset: 5, len: 4, size: 8 })
        ));
        assert!(image.read_u8(8).is_err());
        assert!(image.read_bytes(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_negative_position_rejected() {
        let data = [0u8; 8];
        let image = ImageBuffer::new(&data);

        assert!(matches!(image.offset_of(-1), Err(MemoryError::NegativeOffset(-1))));
        assert!(image.read_i32_at(-4).is_err());
        assert_eq!(image.read_i32_at(4).unwrap(), 0);
    }
}
