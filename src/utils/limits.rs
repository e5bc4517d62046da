/// Width of a big-endian word handed to the parser
pub const WORD_LEN: usize = 8;

/// Maximum encoded length of a u64 varint, ceil(64 / 7)
pub const MAX_VARINT_LEN: usize = 10;

/// Payload bits carried by each varint byte
pub const CHUNK_BITS: u32 = 7;

pub const CHUNK_MASK: u8 = 0x7F;

pub const CONTINUATION_BIT: u8 = 0x80;
