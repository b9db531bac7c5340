use bytes::Bytes;

use crate::error::ImageError;

/// Tag at the start of every image
pub const MAGIC: &[u8; 4] = b"SPC ";

pub const HEADER_SIZE: usize = 512;

/// Size of one SPC snapshot slot
pub const SLOT_SIZE: usize = 66048;

/// Largest count the two header count bytes can hold
pub const MAX_FILES: usize = u16::MAX as usize;

/// Byte offset of slot `index` within an image
pub fn slot_offset(index: usize) -> usize {
    HEADER_SIZE + index * SLOT_SIZE
}

/// Total image size for `count` slots
pub fn image_size(count: usize) -> usize {
    slot_offset(count)
}

/// Length of a slot once its trailing zero padding is stripped
pub fn used_len(slot: &[u8]) -> usize {
    slot.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub count: u16,
}

impl Header {
    /// Header for an image holding `count` slots
    pub fn for_count(count: usize) -> Result<Self, ImageError> {
        if count == 0 {
            return Err(ImageError::configuration("at least one SPC file is required"));
        }

        let count = u16::try_from(count).map_err(|_| {
            ImageError::configuration(format!(
                "too many SPC files: {count} given, an image holds at most {MAX_FILES}"
            ))
        })?;

        Ok(Header { count })
    }

    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Byte 4 is the low byte of the count, byte 5 the high byte, the rest stays zero
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut hdr = [0u8; HEADER_SIZE];
        hdr[0..4].copy_from_slice(MAGIC);
        hdr[4] = (self.count & 0xFF) as u8;
        hdr[5] = (self.count >> 8) as u8;
        hdr
    }
}

#[derive(Debug)]
pub struct SpcImage {
    pub header: Header,
    /// One view per slot, each exactly [`SLOT_SIZE`] bytes
    pub slots: Vec<Bytes>,
    /// Bytes found past the last slot
    pub trailing: usize,
}

impl SpcImage {
    pub fn trailing_bytes(&self) -> usize {
        self.trailing
    }

    pub fn slot(&self, index: usize) -> Option<&Bytes> {
        self.slots.get(index)
    }
}
