//! # OxiPress Core
//!
//! Core components shared by the OxiPress codecs.
//!
//! - [`bitstream`]: MSB-first bit I/O for variable-length codes (Huffman)
//! - [`traits`]: the [`Codec`] trait every algorithm implements
//! - [`algorithm`]: the [`Algorithm`] selector
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI / Engine                                            │
//! │     registry, reports, parallel compare                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codecs                                                  │
//! │     Huffman, LZ77, RLE (independent of each other)      │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     Codec trait, Algorithm, BitReader/Writer, errors    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxipress_core::{Algorithm, MsbBitReader, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write_bits(0b1011, 4);
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b1011_0000]);
//!
//! let mut reader = MsbBitReader::with_bit_limit(&bytes, 4).unwrap();
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
//!
//! let algorithm: Algorithm = "lz77".parse().unwrap();
//! assert_eq!(algorithm, Algorithm::Lz77);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithm;
pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use algorithm::Algorithm;
pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use error::{OxipressError, Result};
pub use traits::Codec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::algorithm::Algorithm;
    pub use crate::error::{OxipressError, Result};
    pub use crate::traits::Codec;
}
