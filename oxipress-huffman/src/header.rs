//! Compressed stream header.
//!
//! ```text
//! +----------------+--------------------------------+---------------+-------------+
//! | u16 symbols BE | symbols x (u8 value, u32 freq) | u32 bitLength | packed bits |
//! +----------------+--------------------------------+---------------+-------------+
//! ```
//!
//! Symbols are listed in ascending byte order. The bit length, not the
//! payload byte length, says how many bits are meaningful.

use crate::frequency::FrequencyTable;
use oxipress_core::error::{OxipressError, Result};

/// Size of the symbol count field.
pub const SYMBOL_COUNT_SIZE: usize = 2;

/// Size of one (value, frequency) entry.
pub const SYMBOL_ENTRY_SIZE: usize = 5;

/// Size of the bit length field.
pub const BIT_LENGTH_SIZE: usize = 4;

/// Parsed header of a Huffman stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanHeader {
    /// Symbol frequencies the tree is rebuilt from.
    pub frequencies: FrequencyTable,
    /// Number of meaningful bits in the packed payload.
    pub bit_length: u32,
}

impl HuffmanHeader {
    /// Encoded size of this header in bytes.
    pub fn encoded_len(&self) -> usize {
        SYMBOL_COUNT_SIZE + self.frequencies.distinct() * SYMBOL_ENTRY_SIZE + BIT_LENGTH_SIZE
    }

    /// Number of payload bytes the bit length implies.
    pub fn payload_len(&self) -> usize {
        (self.bit_length as usize).div_ceil(8)
    }

    /// Append the encoded header to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        // At most 256 distinct byte values, always representable.
        let count = self.frequencies.distinct() as u16;
        out.extend_from_slice(&count.to_be_bytes());
        for (symbol, freq) in self.frequencies.symbols() {
            out.push(symbol);
            out.extend_from_slice(&freq.to_be_bytes());
        }
        out.extend_from_slice(&self.bit_length.to_be_bytes());
    }

    /// Parse a header from the start of `data`.
    ///
    /// Returns the header and the offset where the packed bits begin. Fails
    /// with `MalformedHeader` if any declared field would read past the end
    /// of `data`, or if the symbol list is not a valid frequency table.
    pub fn parse(data: &[u8]) -> Result<(Self, usize)> {
        let count_bytes: [u8; 2] = field(data, 0)?;
        let count = u16::from_be_bytes(count_bytes) as usize;
        if count > 256 {
            return Err(OxipressError::malformed_header(format!(
                "symbol count {} exceeds 256",
                count
            )));
        }

        let table_end = SYMBOL_COUNT_SIZE + count * SYMBOL_ENTRY_SIZE;
        let header_end = table_end + BIT_LENGTH_SIZE;
        if header_end > data.len() {
            return Err(OxipressError::malformed_header(format!(
                "{} symbols need a {}-byte header, buffer has {} bytes",
                count,
                header_end,
                data.len()
            )));
        }

        let mut frequencies = FrequencyTable::new();
        for entry in data[SYMBOL_COUNT_SIZE..table_end].chunks_exact(SYMBOL_ENTRY_SIZE) {
            let symbol = entry[0];
            let freq = u32::from_be_bytes([entry[1], entry[2], entry[3], entry[4]]);
            if freq == 0 {
                return Err(OxipressError::malformed_header(format!(
                    "symbol {:#04x} has zero frequency",
                    symbol
                )));
            }
            if frequencies.get(symbol) != 0 {
                return Err(OxipressError::malformed_header(format!(
                    "symbol {:#04x} listed twice",
                    symbol
                )));
            }
            frequencies.set(symbol, freq);
        }

        let bit_length = u32::from_be_bytes(field(data, table_end)?);
        let header = Self {
            frequencies,
            bit_length,
        };

        let available = data.len() - header_end;
        if header.payload_len() > available {
            return Err(OxipressError::malformed_header(format!(
                "bit length {} needs {} payload bytes, only {} available",
                bit_length,
                header.payload_len(),
                available
            )));
        }

        Ok((header, header_end))
    }
}

/// Read a fixed-size big-endian field at `offset`.
fn field<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    data.get(offset..offset + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            OxipressError::malformed_header(format!(
                "{}-byte field at offset {} overruns {}-byte buffer",
                N,
                offset,
                data.len()
            ))
        })
}
