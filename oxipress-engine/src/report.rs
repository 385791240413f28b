//! Size and timing reports for codec runs.

use oxipress_core::Algorithm;
use serde::Serialize;

/// Percentage size reduction, rounded to two decimals.
///
/// `(original - compressed) / original * 100`. Negative when the output is
/// larger than the input. An empty original reports `0.0`.
pub fn compression_ratio(original_size: usize, compressed_size: usize) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    let ratio = (original_size as f64 - compressed_size as f64) / original_size as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}

/// Outcome of compressing one buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionReport {
    /// Algorithm used.
    pub algorithm: Algorithm,
    /// Input size in bytes.
    pub original_size: usize,
    /// Output size in bytes.
    pub compressed_size: usize,
    /// See [`compression_ratio`].
    pub compression_ratio: f64,
    /// Derived name for the compressed output.
    pub compressed_filename: String,
    /// Wall-clock time spent in the codec.
    pub processing_time_ms: f64,
}

impl CompressionReport {
    /// Whether compression made the data larger.
    pub fn expanded(&self) -> bool {
        self.compressed_size > self.original_size
    }
}

/// Outcome of decompressing one buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompressionReport {
    /// Algorithm used.
    pub algorithm: Algorithm,
    /// Derived name for the decompressed output.
    pub decompressed_filename: String,
    /// Input size in bytes.
    pub compressed_size: usize,
    /// Output size in bytes.
    pub decompressed_size: usize,
    /// Wall-clock time spent in the codec.
    pub processing_time_ms: f64,
}
