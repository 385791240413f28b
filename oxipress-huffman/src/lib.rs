//! # OxiPress Huffman
//!
//! Frequency-driven variable-length prefix coding over whole byte buffers.
//!
//! ## Format
//!
//! | Field | Size |
//! |---|---|
//! | distinct symbol count | `u16` BE |
//! | per symbol: value, frequency | `u8`, `u32` BE |
//! | total bit length | `u32` BE |
//! | packed codes | MSB-first, zero-padded |
//!
//! Only the frequencies are stored. Decompression rebuilds the tree with the
//! same deterministic construction (see [`tree`]) and decodes exactly
//! `bit length` bits. Empty input compresses to an empty buffer.
//!
//! ## Example
//!
//! ```rust
//! use oxipress_huffman::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
pub mod frequency;
pub mod header;
pub mod tree;

pub use codec::HuffmanCodec;
pub use frequency::FrequencyTable;
pub use header::HuffmanHeader;
pub use tree::{Code, CodeTable, HuffmanTree};

use oxipress_core::Result;

/// Compress `data` with Huffman coding.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::new().compress(data)
}

/// Decompress Huffman-coded `data`.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::new().decompress(data)
}
