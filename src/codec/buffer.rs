use std::fmt;

use crate::codec::error::CodecError;
use crate::utils::limits::{CONTINUATION_BIT, MAX_VARINT_LEN};

/// Encoded varint bytes, first byte carries the least-significant chunk.
///
/// Capacity is fixed at [`MAX_VARINT_LEN`]; `len` tracks how much is in use.
/// A buffer obtained from this module is never empty and always framed:
/// every byte but the last has the continuation bit set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarintBuffer {
    bytes: [u8; MAX_VARINT_LEN],
    len: usize,
}

impl VarintBuffer {
    pub(crate) fn new() -> Self {
        Self {
            bytes: [0u8; MAX_VARINT_LEN],
            len: 0,
        }
    }

    /// Single zero byte, the encoding of 0
    pub fn zero() -> Self {
        let mut buf = Self::new();
        buf.len = 1;
        buf
    }

    pub(crate) fn push(&mut self, byte: u8) -> Result<(), CodecError> {
        if self.len == MAX_VARINT_LEN {
            return Err(CodecError::OversizedDecodeInput(self.len + 1));
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Append one encoded byte. Callers stay within ceil(64 / 7) bytes.
    pub(crate) fn push_chunk(&mut self, byte: u8) {
        debug_assert!(self.len < MAX_VARINT_LEN);
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    /// Copy and validate an encoded varint.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        check_framing(data)?;
        let mut buf = Self::new();
        buf.bytes[..data.len()].copy_from_slice(data);
        buf.len = data.len();
        Ok(buf)
    }

    /// Rebuild a buffer from its packed big-endian form.
    ///
    /// Walks the packed value one byte (8 bits) at a time from the low end,
    /// which yields the buffer back to front. `0` maps to `[0x00]`.
    pub fn from_packed(packed: u128) -> Result<Self, CodecError> {
        if packed == 0 {
            return Ok(Self::zero());
        }

        let mut rest = packed;
        let mut reversed = Self::new();
        while rest > 0 {
            if reversed.len == MAX_VARINT_LEN {
                let chunks = (128 - rest.leading_zeros() as usize).div_ceil(8) + reversed.len;
                return Err(CodecError::OversizedDecodeInput(chunks));
            }
            reversed.push(rest as u8)?;
            rest >>= 8;
        }

        let mut buf = reversed;
        buf.bytes[..buf.len].reverse();
        check_framing(buf.as_slice())?;
        Ok(buf)
    }

    /// Pack the bytes into one wide integer, first byte most significant.
    ///
    /// Ten bytes need 80 bits, hence `u128`.
    pub fn to_packed(&self) -> u128 {
        let mut packed = 0u128;
        for (pos, &byte) in self.as_slice().iter().rev().enumerate() {
            packed += u128::from(byte) << (pos * 8);
        }
        packed
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_slice())
    }
}

impl AsRef<[u8]> for VarintBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for VarintBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarintBuffer({:02x?})", self.as_slice())
    }
}

impl fmt::Display for VarintBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for VarintBuffer {
    type Error = CodecError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

/// Length and continuation-bit checks shared by every decode path
pub(crate) fn check_framing(data: &[u8]) -> Result<(), CodecError> {
    if data.is_empty() {
        return Err(CodecError::EmptyVarint);
    }
    if data.len() > MAX_VARINT_LEN {
        return Err(CodecError::OversizedDecodeInput(data.len()));
    }

    let last = data.len() - 1;
    for (index, &byte) in data.iter().enumerate() {
        let continues = byte & CONTINUATION_BIT != 0;
        if continues != (index != last) {
            return Err(CodecError::MalformedVarint { index });
        }
    }
    Ok(())
}
