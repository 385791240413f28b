//! Derived names for compressed and decompressed files.
//!
//! - compressed: `<name>_<algorithm>.bin` (`notes.txt` -> `notes.txt_lz77.bin`)
//! - decompressed: `<stem>_<algorithm>_dec<.ext>` (`notes.txt` -> `notes_lz77_dec.txt`)

use oxipress_core::Algorithm;
use std::path::Path;

/// Name under which the compressed form of `filename` is stored.
pub fn compressed_filename(filename: &str, algorithm: Algorithm) -> String {
    format!("{}_{}.bin", filename, algorithm.name())
}

/// Name under which the decompressed form of `filename` is stored.
pub fn decompressed_filename(filename: &str, algorithm: Algorithm) -> String {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());

    match path.extension() {
        Some(ext) => format!(
            "{}_{}_dec.{}",
            stem,
            algorithm.name(),
            ext.to_string_lossy()
        ),
        None => format!("{}_{}_dec", stem, algorithm.name()),
    }
}

/// Recover the original name from a compressed file name, if it follows
/// the [`compressed_filename`] convention for `algorithm`.
pub fn original_filename(compressed: &str, algorithm: Algorithm) -> Option<String> {
    let suffix = format!("_{}.bin", algorithm.name());
    compressed
        .strip_suffix(&suffix)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
