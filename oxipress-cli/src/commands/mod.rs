//! Command implementations for OxiPress CLI.

pub mod compare;
pub mod compress;
pub mod decompress;

pub use compare::cmd_compare;
pub use compress::cmd_compress;
pub use decompress::cmd_decompress;

use clap::ValueEnum;
use oxipress_engine::Algorithm;

/// Compression algorithm selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Huffman coding with a frequency-table header
    Huffman,
    /// Run-length encoding, (count, value) pairs
    Rle,
    /// LZ77 with 4-byte (distance, length, literal) records
    Lz77,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Huffman => Algorithm::Huffman,
            AlgorithmArg::Rle => Algorithm::Rle,
            AlgorithmArg::Lz77 => Algorithm::Lz77,
        }
    }
}
