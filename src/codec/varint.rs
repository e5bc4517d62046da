use crate::codec::buffer::{check_framing, VarintBuffer};
use crate::codec::error::CodecError;
use crate::utils::limits::{CHUNK_BITS, CHUNK_MASK, CONTINUATION_BIT};
use tracing::{debug, trace};

/// Encode u64 into varint (LEB128-style)
pub fn encode(value: u64) -> VarintBuffer {
    // the extraction loop below emits nothing for 0
    if value == 0 {
        return VarintBuffer::zero();
    }

    let mut rest = value;
    let mut buf = VarintBuffer::new();

    while rest > 0 {
        let mut byte = (rest as u8) & CHUNK_MASK;
        rest >>= CHUNK_BITS;

        if rest > 0 {
            byte |= CONTINUATION_BIT;
        }

        // at most ceil(64 / 7) iterations
        buf.push_chunk(byte);
    }

    trace!("encoded {} -> {}", value, buf);
    buf
}

/// Decode a complete varint.
///
/// The slice must be exactly one framed varint: 1 to 10 bytes, continuation
/// bit on every byte but the last.
pub fn decode(data: &[u8]) -> Result<u64, CodecError> {
    if let Err(e) = check_framing(data) {
        debug!("rejecting varint {}: {}", hex::encode(data), e);
        return Err(e);
    }

    let mut result = 0u64;

    for (pos, &byte) in data.iter().enumerate() {
        let chunk = u64::from(byte & CHUNK_MASK);
        let shift = pos as u32 * CHUNK_BITS;

        // tenth chunk has one bit of room left
        if shift + CHUNK_BITS > u64::BITS && chunk >> (u64::BITS - shift) != 0 {
            debug!("varint {} overflows u64", hex::encode(data));
            return Err(CodecError::Overflow);
        }

        result |= chunk << shift;
    }

    Ok(result)
}

/// Decode the packed wide-integer form produced by [`VarintBuffer::to_packed`]
pub fn decode_packed(packed: u128) -> Result<u64, CodecError> {
    let buf = VarintBuffer::from_packed(packed)?;
    decode(buf.as_slice())
}

/// Number of bytes `encode(value)` produces
pub fn encoded_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()) as usize;
    bits.div_ceil(CHUNK_BITS as usize).max(1)
}
