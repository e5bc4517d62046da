use serde::Serialize;

use crate::codec::VarintBuffer;
use crate::roundtrip::RoundTrip;

/// One raw input byte split into its high and low nibbles
#[derive(Debug, Clone, Serialize)]
pub struct ByteRow {
    pub index: usize,
    pub hex: String,
    pub hi: u8,
    pub lo: u8,
    pub value: u8,
}

impl ByteRow {
    fn new(index: usize, byte: u8) -> Self {
        Self {
            index,
            hex: format!("{:x}", byte),
            hi: byte & 0xF0,
            lo: byte & 0x0F,
            value: byte,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundTripReport {
    pub bytes: Vec<ByteRow>,
    pub value: u64,
    pub encoded: String,
    pub encoded_len: usize,
    pub packed: String,
    pub decoded: u64,
    pub verified: bool,
}

impl RoundTripReport {
    pub fn new(raw: &[u8], trip: &RoundTrip) -> Self {
        Self {
            bytes: raw.iter().enumerate().map(|(i, &b)| ByteRow::new(i, b)).collect(),
            value: trip.value,
            encoded: trip.encoded.to_hex(),
            encoded_len: trip.encoded.len(),
            packed: format_packed(trip.packed()),
            decoded: trip.decoded,
            verified: trip.value == trip.decoded,
        }
    }

    pub fn render_text(&self) -> String {
        let hex_row: Vec<String> = self
            .bytes
            .iter()
            .map(|row| format!("{}: {}", row.index, row.hex))
            .collect();

        let mut lines = vec![hex_row.join(" ")];
        lines.extend(
            self.bytes
                .iter()
                .map(|row| format!("{}: {} + {} = {}", row.index, row.hi, row.lo, row.value)),
        );
        lines.push(format!("varint: {} ({} bytes)", self.encoded, self.encoded_len));
        lines.push(format!("packed: {}", self.packed));
        lines.push(format!("encode: {}", self.value));
        lines.push(format!("decoded: {}", self.decoded));
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EncodeReport {
    pub value: u64,
    pub encoded: String,
    pub encoded_len: usize,
    pub packed: String,
}

impl EncodeReport {
    pub fn new(value: u64, encoded: &VarintBuffer) -> Self {
        Self {
            value,
            encoded: encoded.to_hex(),
            encoded_len: encoded.len(),
            packed: format_packed(encoded.to_packed()),
        }
    }

    pub fn render_text(&self) -> String {
        format!(
            "value: {}\nvarint: {} ({} bytes)\npacked: {}",
            self.value, self.encoded, self.encoded_len, self.packed
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    pub encoded: String,
    pub value: u64,
}

impl DecodeReport {
    pub fn new(encoded: &VarintBuffer, value: u64) -> Self {
        Self {
            encoded: encoded.to_hex(),
            value,
        }
    }

    pub fn render_text(&self) -> String {
        format!("varint: {}\nvalue: {}", self.encoded, self.value)
    }
}

/// Packed form as `0x<hex> (<decimal>)`; u128 does not survive every JSON reader
fn format_packed(packed: u128) -> String {
    format!("{:#x} ({})", packed, packed)
}
