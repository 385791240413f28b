//! Compress command implementation.

use crate::utils::{file_name_of, format_size, parent_dir};
use oxipress_engine::{Algorithm, CodecOptions, compress_with};
use std::path::{Path, PathBuf};
use tracing::info;

/// Compress `file` with `algorithm` and write `<file>_<algorithm>.bin`.
///
/// The output lands in `output_dir` when given, else next to the input.
pub fn cmd_compress(
    file: &Path,
    algorithm: Algorithm,
    output_dir: Option<&Path>,
    options: &CodecOptions,
    json: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filename = file_name_of(file)?;
    let input = std::fs::read(file)?;

    let out = compress_with(algorithm, &filename, &input, options)?;
    let out_path = output_path(file, output_dir, &out.report.compressed_filename);
    std::fs::write(&out_path, &out.data)?;
    info!(path = %out_path.display(), "wrote compressed file");

    if json {
        println!("{}", serde_json::to_string_pretty(&out.report)?);
    } else if !quiet {
        let r = &out.report;
        println!("Compressed {} with {}", file.display(), algorithm);
        println!(
            "  Original:   {} ({} bytes)",
            format_size(r.original_size),
            r.original_size
        );
        println!(
            "  Compressed: {} ({} bytes)",
            format_size(r.compressed_size),
            r.compressed_size
        );
        println!("  Ratio:      {:.2}%", r.compression_ratio);
        println!("  Time:       {:.3} ms", r.processing_time_ms);
        println!("  Output:     {}", out_path.display());
        if r.expanded() {
            println!("  Note: output is larger than input");
        }
    }

    Ok(())
}

/// Where a derived output name is written.
pub(crate) fn output_path(input: &Path, output_dir: Option<&Path>, name: &str) -> PathBuf {
    output_dir.unwrap_or_else(|| parent_dir(input)).join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_next_to_input() {
        assert_eq!(
            output_path(Path::new("data/log.txt"), None, "log.txt_rle.bin"),
            PathBuf::from("data/log.txt_rle.bin")
        );
        assert_eq!(
            output_path(Path::new("log.txt"), None, "log.txt_rle.bin"),
            PathBuf::from("./log.txt_rle.bin")
        );
    }

    #[test]
    fn test_output_in_explicit_dir() {
        let dir = Some(Path::new("out"));
        assert_eq!(
            output_path(Path::new("data/log.txt"), dir, "log.txt_lz77.bin"),
            PathBuf::from("out/log.txt_lz77.bin")
        );
    }
}
