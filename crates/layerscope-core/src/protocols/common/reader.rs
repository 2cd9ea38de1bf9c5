use std::net::Ipv4Addr;
use std::ops::Range;

use crate::protocols::error::DecodeError;

/// Bounds-checked view over the bytes of one protocol layer.
///
/// Every read either stays inside the slice handed to `new` or fails with
/// `DecodeError::BufferTooShort`; nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    layer: &'static str,
    payload: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(layer: &'static str, payload: &'a [u8]) -> Self {
        Self { layer, payload }
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.payload.len() < needed {
            return Err(self.too_short(needed));
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or_else(|| self.too_short(offset + 1))
    }

    pub fn read_u16_be(&self, range: Range<usize>) -> Result<u16, DecodeError> {
        self.read_array::<2>(range).map(u16::from_be_bytes)
    }

    pub fn read_u32_be(&self, range: Range<usize>) -> Result<u32, DecodeError> {
        self.read_array::<4>(range).map(u32::from_be_bytes)
    }

    pub fn read_ipv4(&self, range: Range<usize>) -> Result<Ipv4Addr, DecodeError> {
        self.read_array::<4>(range).map(Ipv4Addr::from)
    }

    pub fn read_array<const N: usize>(&self, range: Range<usize>) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| DecodeError::BufferTooShort {
            layer: self.layer,
            needed: N,
            actual: bytes.len(),
        })
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.payload
            .get(range.clone())
            .ok_or_else(|| self.too_short(range.end))
    }

    pub fn read_tail(&self, offset: usize) -> Result<&'a [u8], DecodeError> {
        self.payload
            .get(offset..)
            .ok_or_else(|| self.too_short(offset))
    }

    fn too_short(&self, needed: usize) -> DecodeError {
        DecodeError::BufferTooShort {
            layer: self.layer,
            needed,
            actual: self.payload.len(),
        }
    }
}
