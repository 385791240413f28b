//! Single-algorithm compress and decompress runs.

use crate::naming::{compressed_filename, decompressed_filename};
use crate::registry::{CodecOptions, codec_for};
use crate::report::{CompressionReport, DecompressionReport, compression_ratio};
use oxipress_core::{Algorithm, OxipressError, Result};
use std::time::Instant;
use tracing::debug;

/// Compressed bytes plus their report.
#[derive(Debug, Clone)]
pub struct CompressionOutput {
    /// Compressed buffer.
    pub data: Vec<u8>,
    /// Sizes, ratio and timing.
    pub report: CompressionReport,
}

/// Decompressed bytes plus their report.
#[derive(Debug, Clone)]
pub struct DecompressionOutput {
    /// Recovered buffer.
    pub data: Vec<u8>,
    /// Sizes and timing.
    pub report: DecompressionReport,
}

/// Compress `input` (originally named `filename`) with `algorithm`.
pub fn compress_with(
    algorithm: Algorithm,
    filename: &str,
    input: &[u8],
    options: &CodecOptions,
) -> Result<CompressionOutput> {
    let codec = codec_for(algorithm, options)?;

    let start = Instant::now();
    let data = codec.compress(input)?;
    let elapsed = start.elapsed();

    let report = CompressionReport {
        algorithm,
        original_size: input.len(),
        compressed_size: data.len(),
        compression_ratio: compression_ratio(input.len(), data.len()),
        compressed_filename: compressed_filename(filename, algorithm),
        processing_time_ms: elapsed.as_secs_f64() * 1000.0,
    };
    debug!(
        %algorithm,
        original = report.original_size,
        compressed = report.compressed_size,
        ratio = report.compression_ratio,
        ?elapsed,
        "compressed"
    );

    Ok(CompressionOutput { data, report })
}

/// Decompress `input`, the compressed form of `filename`.
pub fn decompress_with(
    algorithm: Algorithm,
    filename: &str,
    input: &[u8],
    options: &CodecOptions,
) -> Result<DecompressionOutput> {
    let codec = codec_for(algorithm, options)?;

    let start = Instant::now();
    let data = codec.decompress(input)?;
    let elapsed = start.elapsed();

    let report = DecompressionReport {
        algorithm,
        decompressed_filename: decompressed_filename(filename, algorithm),
        compressed_size: input.len(),
        decompressed_size: data.len(),
        processing_time_ms: elapsed.as_secs_f64() * 1000.0,
    };
    debug!(
        %algorithm,
        compressed = report.compressed_size,
        decompressed = report.decompressed_size,
        ?elapsed,
        "decompressed"
    );

    Ok(DecompressionOutput { data, report })
}

/// Compress then decompress `input` and check the bytes come back unchanged.
///
/// Returns the compressed size on success.
pub fn verify_roundtrip(
    algorithm: Algorithm,
    input: &[u8],
    options: &CodecOptions,
) -> Result<usize> {
    let codec = codec_for(algorithm, options)?;
    let compressed = codec.compress(input)?;
    let restored = codec.decompress(&compressed)?;
    check_restored(algorithm, input, &restored)?;
    Ok(compressed.len())
}

/// Fail with the first differing byte if `restored` is not `input`.
pub(crate) fn check_restored(algorithm: Algorithm, input: &[u8], restored: &[u8]) -> Result<()> {
    if restored == input {
        return Ok(());
    }

    let offset = restored
        .iter()
        .zip(input)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| restored.len().min(input.len()));
    Err(OxipressError::corrupt_stream(
        offset as u64 * 8,
        format!(
            "{} round trip differs at byte {} ({} bytes in, {} out)",
            algorithm,
            offset,
            input.len(),
            restored.len()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_report() {
        let out = compress_with(
            Algorithm::Rle,
            "runs.txt",
            b"AAAAABBBCC",
            &CodecOptions::default(),
        )
        .unwrap();
        assert_eq!(out.data, vec![5, b'A', 3, b'B', 2, b'C']);
        assert_eq!(out.report.original_size, 10);
        assert_eq!(out.report.compressed_size, 6);
        assert_eq!(out.report.compression_ratio, 40.0);
        assert_eq!(out.report.compressed_filename, "runs.txt_rle.bin");
    }

    #[test]
    fn test_expansion_is_not_an_error() {
        let out = compress_with(Algorithm::Rle, "x", b"abcd", &CodecOptions::default()).unwrap();
        assert!(out.report.expanded());
        assert_eq!(out.report.compression_ratio, -100.0);
    }

    #[test]
    fn test_decompress_report() {
        let options = CodecOptions::default();
        let name = "notes.md";
        let input = b"hello hello";
        let compressed = compress_with(Algorithm::Huffman, name, input, &options).unwrap();
        let out = decompress_with(Algorithm::Huffman, name, &compressed.data, &options).unwrap();
        assert_eq!(out.data, b"hello hello");
        assert_eq!(out.report.decompressed_filename, "notes_huffman_dec.md");
        assert_eq!(out.report.decompressed_size, 11);
        assert_eq!(out.report.compressed_size, compressed.data.len());
    }

    #[test]
    fn test_decompress_propagates_codec_error() {
        let options = CodecOptions::default();
        let err = decompress_with(Algorithm::Lz77, "x", &[1, 2, 3], &options).unwrap_err();
        assert!(matches!(err, OxipressError::TruncatedRecord { .. }));
    }

    #[test]
    fn test_check_restored_reports_offset() {
        assert!(check_restored(Algorithm::Rle, b"abc", b"abc").is_ok());

        let err = check_restored(Algorithm::Rle, b"abcd", b"abXd").unwrap_err();
        assert!(err.to_string().contains("differs at byte 2"));

        let err = check_restored(Algorithm::Lz77, b"abcd", b"ab").unwrap_err();
        assert!(err.to_string().contains("(4 bytes in, 2 out)"));
    }

    #[test]
    fn test_verify_roundtrip() {
        let data = b"verify every algorithm, verify every algorithm".to_vec();
        for algorithm in Algorithm::ALL {
            let size = verify_roundtrip(algorithm, &data, &CodecOptions::default()).unwrap();
            assert!(size > 0);
        }
    }
}
