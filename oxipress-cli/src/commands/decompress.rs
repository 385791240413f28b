//! Decompress command implementation.

use super::compress::output_path;
use crate::utils::{file_name_of, format_size};
use oxipress_engine::{Algorithm, CodecOptions, decompress_with, original_filename};
use std::path::Path;
use tracing::{debug, info};

/// Decompress `file` with `algorithm`.
///
/// Without `output`, the result is written next to the input under
/// `<stem>_<algorithm>_dec<.ext>`, where the stem comes from the original
/// name recovered from a `<name>_<algorithm>.bin` file name.
pub fn cmd_decompress(
    file: &Path,
    algorithm: Algorithm,
    output: Option<&Path>,
    json: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let compressed_name = file_name_of(file)?;
    let original = original_filename(&compressed_name, algorithm).unwrap_or_else(|| {
        debug!(name = %compressed_name, "file name does not carry the algorithm suffix");
        compressed_name.clone()
    });

    let input = std::fs::read(file)?;
    let out = decompress_with(algorithm, &original, &input, &CodecOptions::default())?;

    let out_path = match output {
        Some(path) => path.to_path_buf(),
        None => output_path(file, None, &out.report.decompressed_filename),
    };
    std::fs::write(&out_path, &out.data)?;
    info!(path = %out_path.display(), "wrote decompressed file");

    if json {
        println!("{}", serde_json::to_string_pretty(&out.report)?);
    } else if !quiet {
        let r = &out.report;
        println!("Decompressed {} with {}", file.display(), algorithm);
        println!(
            "  Compressed:   {} ({} bytes)",
            format_size(r.compressed_size),
            r.compressed_size
        );
        println!(
            "  Decompressed: {} ({} bytes)",
            format_size(r.decompressed_size),
            r.decompressed_size
        );
        println!("  Time:         {:.3} ms", r.processing_time_ms);
        println!("  Output:       {}", out_path.display());
    }

    Ok(())
}
