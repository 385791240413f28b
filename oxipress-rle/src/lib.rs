//! # OxiPress RLE
//!
//! Run-length encoding of consecutive identical bytes.
//!
//! Each run is written as a 2-byte `(count, value)` record. Runs are capped
//! at 255 so the count fits one byte; a longer run continues in the next
//! record.
//!
//! ## Example
//!
//! ```rust
//! use oxipress_rle::{compress, decompress};
//!
//! let original = b"AAAAABBBCC";
//! let compressed = compress(original).unwrap();
//! assert_eq!(compressed, vec![5, b'A', 3, b'B', 2, b'C']);
//! assert_eq!(decompress(&compressed).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;

pub use codec::{MAX_RUN, RECORD_SIZE, RleCodec, Run};

use oxipress_core::Result;

/// Compress `data` with run-length encoding.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    RleCodec::new().compress(data)
}

/// Decompress run-length encoded `data`.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    RleCodec::new().decompress(data)
}
