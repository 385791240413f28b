//! Compare command implementation.

use crate::utils::{RoundTrip, create_progress_bar, file_name_of, print_outcomes};
use oxipress_engine::{
    Algorithm, AlgorithmOutcome, CodecOptions, CompressionReport, best_outcome, compress_all,
    verify_outcomes,
};
use serde::Serialize;
use std::path::Path;

/// JSON row for one algorithm.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeJson<'a> {
    algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a CompressionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verify_error: Option<String>,
}

/// JSON output for a comparison.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareJson<'a> {
    file: String,
    original_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    best: Option<Algorithm>,
    results: Vec<OutcomeJson<'a>>,
}

/// Compress `file` with every algorithm in parallel and report the results.
///
/// Nothing is written to disk. With `verify`, each compressed output is
/// decompressed and checked against the input.
pub fn cmd_compare(
    file: &Path,
    options: &CodecOptions,
    json: bool,
    verify: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filename = file_name_of(file)?;
    let input = std::fs::read(file)?;

    let steps = if verify { 2 } else { 1 };
    let pb = create_progress_bar(steps, !json && !quiet);
    pb.set_message("compressing");
    let outcomes = compress_all(&filename, &input, options);
    pb.inc(1);

    let checks = if verify {
        pb.set_message("verifying");
        let checks = verify_outcomes(&filename, &input, &outcomes, options);
        pb.inc(1);
        Some(checks)
    } else {
        None
    };
    pb.finish_and_clear();

    if json {
        let doc = CompareJson {
            file: file.display().to_string(),
            original_size: input.len(),
            best: best_outcome(&outcomes).map(|r| r.algorithm),
            results: outcome_rows(&outcomes, checks.as_deref()),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("Comparing {} ({} bytes)", file.display(), input.len());
        println!();
        print_outcomes(&outcomes, checks.as_deref());
    }

    let failed = failed_algorithms(&outcomes, checks.as_deref());
    if !failed.is_empty() {
        let names = failed.join(", ");
        return Err(format!("round-trip verification failed: {}", names).into());
    }

    Ok(())
}

fn outcome_rows<'a>(
    outcomes: &'a [AlgorithmOutcome],
    checks: Option<&[RoundTrip]>,
) -> Vec<OutcomeJson<'a>> {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| {
            let check = checks.and_then(|c| c.get(i)).and_then(Option::as_ref);
            let verify_error = check.and_then(|r| r.as_ref().err());
            OutcomeJson {
                algorithm: outcome.algorithm,
                report: outcome.report(),
                error: outcome.result.as_ref().err().map(ToString::to_string),
                verified: check.map(Result::is_ok),
                verify_error: verify_error.map(ToString::to_string),
            }
        })
        .collect()
}

/// Names of the algorithms whose round trip failed.
fn failed_algorithms(
    outcomes: &[AlgorithmOutcome],
    checks: Option<&[RoundTrip]>,
) -> Vec<&'static str> {
    outcomes
        .iter()
        .zip(checks.unwrap_or_default())
        .filter(|(_, check)| matches!(check, Some(Err(_))))
        .map(|(outcome, _)| outcome.algorithm.name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxipress_engine::Lz77Config;

    #[test]
    fn test_json_rows() {
        let input = b"aaaaaaaabbbb";
        let options = CodecOptions::default();
        let outcomes = compress_all("a.txt", input, &options);
        let checks = verify_outcomes("a.txt", input, &outcomes, &options);
        let rows = outcome_rows(&outcomes, Some(&checks));
        let value = serde_json::to_value(&rows).unwrap();

        assert_eq!(value[0]["algorithm"], "huffman");
        assert_eq!(value[1]["report"]["compressedSize"], 4);
        assert_eq!(value[1]["report"]["compressedFilename"], "a.txt_rle.bin");
        assert_eq!(value[2]["verified"], true);
        assert!(value[2].get("verifyError").is_none());
        assert!(value[0].get("error").is_none());
        assert!(failed_algorithms(&outcomes, Some(&checks)).is_empty());
    }

    #[test]
    fn test_json_rows_with_error() {
        let options = CodecOptions {
            lz77: Lz77Config {
                window_size: 0,
                lookahead_size: 16,
            },
        };
        let outcomes = compress_all("a.txt", b"abc", &options);
        let rows = outcome_rows(&outcomes, None);
        let value = serde_json::to_value(&rows).unwrap();

        assert!(value[2]["error"].is_string());
        assert!(value[2].get("report").is_none());
        assert!(value[0].get("verified").is_none());
    }

    #[test]
    fn test_verify_failure_carries_message() {
        let input = b"aaaabbbbcccc";
        let options = CodecOptions::default();
        let mut outcomes = compress_all("a.txt", input, &options);
        // Bump the first RLE count so the restored bytes run one long.
        outcomes[1].result.as_mut().unwrap().data[0] += 1;

        let checks = verify_outcomes("a.txt", input, &outcomes, &options);
        let rows = outcome_rows(&outcomes, Some(&checks));
        let value = serde_json::to_value(&rows).unwrap();

        assert_eq!(value[0]["verified"], true);
        assert_eq!(value[1]["verified"], false);
        let message = value[1]["verifyError"].as_str().unwrap();
        assert!(message.contains("rle round trip differs at byte 4"));
        assert_eq!(failed_algorithms(&outcomes, Some(&checks)), vec!["rle"]);
    }

    #[test]
    fn test_unverified_outcome_has_no_verdict() {
        let options = CodecOptions {
            lz77: Lz77Config {
                window_size: 0,
                lookahead_size: 16,
            },
        };
        let outcomes = compress_all("a.txt", b"abc", &options);
        let checks = verify_outcomes("a.txt", b"abc", &outcomes, &options);
        let value = serde_json::to_value(outcome_rows(&outcomes, Some(&checks))).unwrap();

        assert!(value[2].get("verified").is_none());
        assert!(value[2].get("verifyError").is_none());
        assert!(failed_algorithms(&outcomes, Some(&checks)).is_empty());
    }
}
