use std::fmt;

#[derive(Debug)]
pub enum CodecError {
    TruncatedInput { expected: usize, actual: usize },
    InvalidWidth(usize),
    EmptyVarint,
    OversizedDecodeInput(usize),
    MalformedVarint { index: usize },
    Overflow,
    RoundTripMismatch { expected: u64, actual: u64 },
    Io(std::io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::TruncatedInput { expected, actual } =>
                write!(f, "truncated input: expected {} bytes, got {}", expected, actual),
            CodecError::InvalidWidth(width) =>
                write!(f, "invalid word width {} (must be 1..=8)", width),
            CodecError::EmptyVarint =>
                write!(f, "empty varint"),
            CodecError::OversizedDecodeInput(chunks) =>
                write!(f, "varint too long: {} chunks", chunks),
            CodecError::MalformedVarint { index } =>
                write!(f, "malformed varint: bad continuation bit at byte {}", index),
            CodecError::Overflow =>
                write!(f, "varint overflows u64"),
            CodecError::RoundTripMismatch { expected, actual } =>
                write!(f, "round trip mismatch: encoded {}, decoded {}", expected, actual),
            CodecError::Io(e) =>
                write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(e: std::io::Error) -> Self {
        CodecError::Io(e)
    }
}
