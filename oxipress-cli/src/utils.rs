//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxipress_engine::{AlgorithmOutcome, OxipressError, best_outcome};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `-q` selects `error`, `-v` `debug`,
/// `-vv` `trace`, and the default is `warn`. Log output goes to stderr so
/// JSON on stdout stays parseable.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Log level used when `RUST_LOG` is unset.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// File name component of `path` as a string.
pub fn file_name_of(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| format!("{} has no file name", path.display()).into())
}

/// Directory holding `path`, or `.` for a bare file name.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Human-readable byte count.
pub fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Round-trip check for one outcome; `None` when it did not compress.
pub type RoundTrip = Option<Result<(), OxipressError>>;

/// Table suffix for a round-trip check.
pub fn check_suffix(check: Option<&RoundTrip>) -> String {
    match check {
        Some(Some(Ok(()))) => " ok".to_string(),
        Some(Some(Err(e))) => format!(" FAILED: {}", e),
        Some(None) | None => String::new(),
    }
}

/// Print comparison outcomes in a formatted table.
///
/// `checks` holds one round-trip check per outcome, in the same order, when
/// `--verify` was requested.
pub fn print_outcomes(outcomes: &[AlgorithmOutcome], checks: Option<&[RoundTrip]>) {
    println!(
        "{:<8} {:>12} {:>12} {:>9} {:>10}  {}",
        "Method", "Original", "Compressed", "Ratio", "Time (ms)", "Output",
    );
    println!("{}", "-".repeat(76));

    let best = best_outcome(outcomes).map(|r| r.algorithm);

    for (i, outcome) in outcomes.iter().enumerate() {
        let check = check_suffix(checks.and_then(|c| c.get(i)));

        match &outcome.result {
            Ok(out) => {
                let r = &out.report;
                let marker = if best == Some(r.algorithm) { "*" } else { " " };
                println!(
                    "{:<8} {:>12} {:>12} {:>8.2}% {:>10.3} {}{}{}",
                    r.algorithm.name(),
                    r.original_size,
                    r.compressed_size,
                    r.compression_ratio,
                    r.processing_time_ms,
                    marker,
                    r.compressed_filename,
                    check,
                );
            }
            Err(e) => {
                println!("{:<8} error: {}", outcome.algorithm.name(), e);
            }
        }
    }

    println!("{}", "-".repeat(76));
    if let Some(best) = best_outcome(outcomes) {
        println!(
            "Smallest: {} ({}, {:.2}%)",
            best.algorithm,
            format_size(best.compressed_size),
            best.compression_ratio
        );
    }
}
