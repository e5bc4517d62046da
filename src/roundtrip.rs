use crate::codec::{self, CodecError, VarintBuffer};
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTrip {
    pub value: u64,
    pub encoded: VarintBuffer,
    pub decoded: u64,
}

impl RoundTrip {
    pub fn packed(&self) -> u128 {
        self.encoded.to_packed()
    }
}

/// Encode `value`, decode it back, and check both ends agree
pub fn verify(value: u64) -> Result<RoundTrip, CodecError> {
    let encoded = codec::encode(value);
    let decoded = codec::decode(encoded.as_slice())?;

    if decoded != value {
        error!("Round trip mismatch: {} -> {} -> {}", value, encoded, decoded);
        return Err(CodecError::RoundTripMismatch {
            expected: value,
            actual: decoded,
        });
    }

    debug!("round trip ok: {} ({} bytes)", value, encoded.len());
    Ok(RoundTrip { value, encoded, decoded })
}

/// Parse a big-endian word of `width` bytes and verify its round trip
pub fn verify_block(bytes: &[u8], width: usize) -> Result<RoundTrip, CodecError> {
    let value = codec::parse_be(bytes, width)?;
    verify(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_150() {
        let trip = verify_block(&[0, 0, 0, 0, 0, 0, 0, 0x96], 8).unwrap();
        assert_eq!(trip.value, 150);
        assert_eq!(trip.decoded, 150);
        assert_eq!(trip.encoded.as_slice(), &[0x96, 0x01]);
        assert_eq!(trip.packed(), 0x9601);
    }

    #[test]
    fn verifies_zero_block() {
        let trip = verify_block(&[0; 8], 8).unwrap();
        assert_eq!(trip.encoded.as_slice(), &[0x00]);
        assert_eq!(trip.decoded, 0);
    }

    #[test]
    fn verifies_max() {
        let trip = verify(u64::MAX).unwrap();
        assert_eq!(trip.decoded, u64::MAX);
        assert_eq!(trip.encoded.len(), 10);
    }

    #[test]
    fn truncated_block_fails() {
        assert!(matches!(
            verify_block(&[0, 0, 0, 0x96], 8),
            Err(CodecError::TruncatedInput { expected: 8, actual: 4 })
        ));
    }
}
