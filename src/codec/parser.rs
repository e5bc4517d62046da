use crate::codec::error::CodecError;
use crate::utils::limits::WORD_LEN;
use tracing::{error, trace};

/// Interpret the first `width` bytes as a big-endian unsigned integer
pub fn parse_be(bytes: &[u8], width: usize) -> Result<u64, CodecError> {
    if width == 0 || width > WORD_LEN {
        return Err(CodecError::InvalidWidth(width));
    }

    if bytes.len() < width {
        error!("Word too short: {} bytes, need {}", bytes.len(), width);
        return Err(CodecError::TruncatedInput {
            expected: width,
            actual: bytes.len(),
        });
    }

    let mut value = 0u64;

    // last byte is least significant
    for (pos, &byte) in bytes[..width].iter().rev().enumerate() {
        value += u64::from(byte) << (pos * 8);
    }

    trace!("parsed {} bytes -> {}", width, value);
    Ok(value)
}

/// Parse a full 8-byte word
pub fn parse_word(bytes: &[u8]) -> Result<u64, CodecError> {
    parse_be(bytes, WORD_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_low_byte() {
        assert_eq!(parse_word(&[0, 0, 0, 0, 0, 0, 0, 0x96]).unwrap(), 150);
    }

    #[test]
    fn parses_second_byte() {
        assert_eq!(parse_word(&[0, 0, 0, 0, 0, 0, 0x01, 0x00]).unwrap(), 256);
    }

    #[test]
    fn parses_full_width() {
        assert_eq!(parse_word(&[0xFF; 8]).unwrap(), u64::MAX);
        assert_eq!(
            parse_word(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]).unwrap(),
            0x0123_4567_89AB_CDEF
        );
    }

    #[test]
    fn matches_from_be_bytes() {
        let raw = [0x80, 0, 0, 0, 0, 0, 0, 0x01];
        assert_eq!(parse_word(&raw).unwrap(), u64::from_be_bytes(raw));
    }

    #[test]
    fn narrow_width_reads_leading_bytes() {
        // FF00 read as a 2-byte word
        assert_eq!(parse_be(&[0xFF, 0x00, 0xAA], 2).unwrap(), 65280);
    }

    #[test]
    fn short_input_is_truncated() {
        match parse_word(&[0, 0, 0, 0x96]) {
            Err(CodecError::TruncatedInput { expected, actual }) => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 4);
            }
            other => panic!("expected TruncatedInput, got {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_width() {
        assert!(matches!(parse_be(&[0; 9], 0), Err(CodecError::InvalidWidth(0))));
        assert!(matches!(parse_be(&[0; 9], 9), Err(CodecError::InvalidWidth(9))));
    }
}
