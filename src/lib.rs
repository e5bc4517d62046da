pub mod cli;
pub mod codec;
pub mod config;
pub mod report;
pub mod roundtrip;
pub mod utils;

pub use codec::{
    decode, decode_packed, encode, encoded_len, parse_be, parse_word, CodecError, VarintBuffer,
};
pub use roundtrip::{verify, verify_block, RoundTrip};
