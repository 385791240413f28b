//! Run every algorithm over the same input in parallel.
//!
//! The input is shared read-only across rayon tasks. Each algorithm's result
//! is kept separately, so a failure in one never affects the others.

use crate::operation::{CompressionOutput, check_restored, compress_with, decompress_with};
use crate::registry::CodecOptions;
use crate::report::CompressionReport;
use oxipress_core::{Algorithm, Result};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Result of one algorithm within a comparison.
#[derive(Debug)]
pub struct AlgorithmOutcome {
    /// Algorithm that produced this outcome.
    pub algorithm: Algorithm,
    /// Compressed bytes and report, or the error that stopped this algorithm.
    pub result: Result<CompressionOutput>,
}

impl AlgorithmOutcome {
    /// The report, if compression succeeded.
    pub fn report(&self) -> Option<&CompressionReport> {
        self.result.as_ref().ok().map(|out| &out.report)
    }
}

/// Compress `input` with every algorithm concurrently.
///
/// Outcomes come back in [`Algorithm::ALL`] order.
pub fn compress_all(filename: &str, input: &[u8], options: &CodecOptions) -> Vec<AlgorithmOutcome> {
    compress_selected(&Algorithm::ALL, filename, input, options)
}

/// Compress `input` with each of `algorithms` concurrently, preserving order.
pub fn compress_selected(
    algorithms: &[Algorithm],
    filename: &str,
    input: &[u8],
    options: &CodecOptions,
) -> Vec<AlgorithmOutcome> {
    debug!(
        filename,
        size = input.len(),
        count = algorithms.len(),
        "comparing algorithms"
    );

    algorithms
        .par_iter()
        .map(|&algorithm| {
            let result = compress_with(algorithm, filename, input, options);
            if let Err(e) = &result {
                warn!(%algorithm, error = %e, "algorithm failed");
            }
            AlgorithmOutcome { algorithm, result }
        })
        .collect()
}

/// Decompress each successful outcome concurrently and check it against `input`.
///
/// Returns one entry per outcome, in order. Outcomes that failed to compress
/// have nothing to check and yield `None`.
pub fn verify_outcomes(
    filename: &str,
    input: &[u8],
    outcomes: &[AlgorithmOutcome],
    options: &CodecOptions,
) -> Vec<Option<Result<()>>> {
    outcomes
        .par_iter()
        .map(|outcome| {
            let out = outcome.result.as_ref().ok()?;
            let result = check_output(outcome.algorithm, filename, input, &out.data, options);
            if let Err(e) = &result {
                warn!(algorithm = %outcome.algorithm, error = %e, "round trip failed");
            }
            Some(result)
        })
        .collect()
}

fn check_output(
    algorithm: Algorithm,
    filename: &str,
    input: &[u8],
    compressed: &[u8],
    options: &CodecOptions,
) -> Result<()> {
    let restored = decompress_with(algorithm, filename, compressed, options)?;
    check_restored(algorithm, input, &restored.data)
}

/// The successful outcome with the smallest output.
pub fn best_outcome(outcomes: &[AlgorithmOutcome]) -> Option<&CompressionReport> {
    outcomes
        .iter()
        .filter_map(AlgorithmOutcome::report)
        .min_by_key(|report| report.compressed_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipress_core::OxipressError;
    use oxipress_lz77::Lz77Config;

    #[test]
    fn test_order_and_sizes() {
        let data = vec![b'z'; 1000];
        let outcomes = compress_all("z.bin", &data, &CodecOptions::default());
        let order: Vec<_> = outcomes.iter().map(|o| o.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());

        for outcome in &outcomes {
            let report = outcome.report().unwrap();
            assert_eq!(report.original_size, 1000);
            assert!(report.compressed_size < 1000);
        }
    }

    #[test]
    fn test_failure_is_isolated() {
        let options = CodecOptions {
            lz77: Lz77Config {
                window_size: 0,
                lookahead_size: 16,
            },
        };
        let outcomes = compress_all("a.txt", b"aaaa bbbb", &options);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_ok());
        assert!(outcomes[2].result.is_err());
    }

    #[test]
    fn test_best_outcome() {
        let data = vec![0u8; 5000];
        let outcomes = compress_all("zeros", &data, &CodecOptions::default());
        let best = best_outcome(&outcomes).unwrap();
        // 20 RLE records of 2 bytes beat the others on a single long run.
        assert_eq!(best.algorithm, Algorithm::Rle);
        assert_eq!(best.compressed_size, 40);
    }

    #[test]
    fn test_verify_outcomes() {
        let data = b"parallel round trips".repeat(30);
        let options = CodecOptions::default();
        let outcomes = compress_all("a.txt", &data, &options);
        let checks = verify_outcomes("a.txt", &data, &outcomes, &options);
        assert_eq!(checks.len(), 3);
        for check in checks {
            assert!(matches!(check, Some(Ok(()))));
        }
    }

    #[test]
    fn test_verify_outcomes_reports_damage() {
        let data = b"aaaabbbbcccc".to_vec();
        let options = CodecOptions::default();
        let mut outcomes = compress_all("a.txt", &data, &options);
        // RLE pairs: bump the first count so the output grows by one byte.
        outcomes[1].result.as_mut().unwrap().data[0] += 1;
        // LZ77: drop the last byte so the final record is cut short.
        outcomes[2].result.as_mut().unwrap().data.pop();

        let checks = verify_outcomes("a.txt", &data, &outcomes, &options);
        assert!(matches!(checks[0], Some(Ok(()))));

        let rle = checks[1].as_ref().unwrap().as_ref().unwrap_err();
        assert!(rle.to_string().contains("differs at byte 4"));

        let lz77 = checks[2].as_ref().unwrap().as_ref().unwrap_err();
        assert!(matches!(lz77, OxipressError::TruncatedRecord { .. }));
    }

    #[test]
    fn test_verify_skips_failed_outcomes() {
        let options = CodecOptions {
            lz77: Lz77Config {
                window_size: 0,
                lookahead_size: 16,
            },
        };
        let outcomes = compress_all("a.txt", b"abc", &options);
        let checks = verify_outcomes("a.txt", b"abc", &outcomes, &options);
        assert!(checks[0].is_some());
        assert!(checks[2].is_none());
    }
}
