//! Algorithm selector shared by the engine and CLI.

use crate::error::OxipressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A compression algorithm offered by OxiPress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Frequency-driven prefix coding.
    Huffman,
    /// Run-length encoding of repeated bytes.
    Rle,
    /// Sliding-window back-reference coding.
    Lz77,
}

impl Algorithm {
    /// Every algorithm, in the order results are reported.
    pub const ALL: [Algorithm; 3] = [Algorithm::Huffman, Algorithm::Rle, Algorithm::Lz77];

    /// Lowercase selector name, also used in derived file names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Huffman => "huffman",
            Self::Rle => "rle",
            Self::Lz77 => "lz77",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = OxipressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "huffman" => Ok(Self::Huffman),
            "rle" => Ok(Self::Rle),
            "lz77" => Ok(Self::Lz77),
            _ => Err(OxipressError::unsupported_algorithm(s)),
        }
    }
}
