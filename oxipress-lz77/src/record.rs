//! Fixed-size LZ77 records.
//!
//! ```text
//! +-----------------+-----------+------------+
//! | u16 distance BE | u8 length | u8 literal |
//! +-----------------+-----------+------------+
//! ```
//!
//! `distance == 0 && length == 0` marks a literal-only record.

/// Size of one encoded record.
pub const RECORD_SIZE: usize = 4;

/// One (distance, length, literal) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Record {
    /// How far back the copy starts.
    pub distance: u16,
    /// Number of bytes to copy.
    pub length: u8,
    /// Byte appended after the copy.
    pub literal: u8,
}

impl Lz77Record {
    /// A literal-only record.
    pub fn literal(byte: u8) -> Self {
        Self {
            distance: 0,
            length: 0,
            literal: byte,
        }
    }

    /// A back-reference followed by `literal`.
    pub fn back_reference(distance: u16, length: u8, literal: u8) -> Self {
        Self {
            distance,
            length,
            literal,
        }
    }

    /// Whether this record carries no back-reference.
    pub fn is_literal(&self) -> bool {
        self.distance == 0 && self.length == 0
    }

    /// Number of output bytes this record expands to.
    pub fn expanded_len(&self) -> usize {
        self.length as usize + 1
    }

    /// Encode to wire bytes.
    pub fn to_bytes(self) -> [u8; RECORD_SIZE] {
        let [hi, lo] = self.distance.to_be_bytes();
        [hi, lo, self.length, self.literal]
    }

    /// Decode from wire bytes.
    pub fn from_bytes(bytes: [u8; RECORD_SIZE]) -> Self {
        Self {
            distance: u16::from_be_bytes([bytes[0], bytes[1]]),
            length: bytes[2],
            literal: bytes[3],
        }
    }
}
