//! # OxiPress LZ77
//!
//! Windowed LZ77 with fixed 4-byte records.
//!
//! ## Algorithm
//!
//! A cursor scans the input left to right. At each position the window of
//! the preceding `window_size` bytes is searched for the longest match of at
//! least three bytes (nearest wins ties, up to `lookahead_size` bytes). A
//! match is emitted as `(distance, length, next byte)` and the cursor skips
//! `length + 1` bytes; otherwise a literal `(0, 0, byte)` is emitted.
//!
//! Matches may overlap the bytes they produce (`distance < length`), so the
//! decoder copies byte by byte from its own growing output.
//!
//! ## Example
//!
//! ```rust
//! use oxipress_lz77::{Lz77Codec, Lz77Config, compress, decompress};
//!
//! let original = b"abcabcabcabc";
//! let compressed = compress(original).unwrap();
//! assert_eq!(compressed.len() % 4, 0);
//! assert_eq!(decompress(&compressed).unwrap(), original);
//!
//! let small = Lz77Codec::new(Lz77Config::new(256, 8).unwrap()).unwrap();
//! let compressed = small.compress(original).unwrap();
//! assert_eq!(small.decompress(&compressed).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
pub mod config;
pub mod matcher;
pub mod record;

pub use codec::Lz77Codec;
pub use config::Lz77Config;
pub use matcher::{Match, MatchFinder, find_longest_match_brute_force};
pub use record::{Lz77Record, RECORD_SIZE};

use oxipress_core::Result;

/// Compress `data` with the default configuration.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    Lz77Codec::default().compress(data)
}

/// Decompress an LZ77 record stream.
///
/// Records are self-describing, so no configuration is needed.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Lz77Codec::default().decompress(data)
}
