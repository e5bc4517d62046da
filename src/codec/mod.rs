pub mod buffer;
pub mod error;
pub mod parser;
pub mod varint;

pub use buffer::VarintBuffer;
pub use error::CodecError;
pub use parser::*;
pub use varint::*;
