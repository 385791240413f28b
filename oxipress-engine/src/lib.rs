//! # OxiPress Engine
//!
//! Glue between callers and the OxiPress codecs:
//!
//! - [`registry`]: build a [`Codec`](oxipress_core::Codec) for an [`Algorithm`]
//! - [`operation`]: compress/decompress one buffer and report sizes, ratio and time
//! - [`compare`]: run all algorithms over one input in parallel
//! - [`naming`]: derived file names for compressed and decompressed outputs
//! - [`report`]: report types and the compression ratio
//!
//! The codecs are pure functions over byte slices; the engine adds no state
//! of its own, so every entry point is safe to call from many threads.
//!
//! ## Example
//!
//! ```rust
//! use oxipress_engine::{Algorithm, CodecOptions, compress_all, compress_with, decompress_with};
//!
//! let options = CodecOptions::default();
//! let data = b"AAAAABBBCC";
//!
//! let out = compress_with(Algorithm::Rle, "runs.txt", data, &options).unwrap();
//! assert_eq!(out.report.compression_ratio, 40.0);
//! assert_eq!(out.report.compressed_filename, "runs.txt_rle.bin");
//!
//! let back = decompress_with(Algorithm::Rle, "runs.txt", &out.data, &options).unwrap();
//! assert_eq!(back.data, data);
//!
//! for outcome in compress_all("runs.txt", data, &options) {
//!     assert!(outcome.result.is_ok());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod naming;
pub mod operation;
pub mod registry;
pub mod report;

pub use compare::{AlgorithmOutcome, best_outcome, compress_all, compress_selected, verify_outcomes};
pub use naming::{compressed_filename, decompressed_filename, original_filename};
pub use operation::{
    CompressionOutput, DecompressionOutput, compress_with, decompress_with, verify_roundtrip,
};
pub use oxipress_core::{Algorithm, OxipressError, Result};
pub use oxipress_lz77::Lz77Config;
pub use registry::{CodecOptions, codec_for};
pub use report::{CompressionReport, DecompressionReport, compression_ratio};
