//! Mapping from [`Algorithm`] to codec instances.

use oxipress_core::{Algorithm, Codec, Result};
use oxipress_huffman::HuffmanCodec;
use oxipress_lz77::{Lz77Codec, Lz77Config};
use oxipress_rle::RleCodec;

/// Parameters for the configurable codecs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// LZ77 window and lookahead.
    pub lz77: Lz77Config,
}

impl CodecOptions {
    /// Options with a custom LZ77 configuration.
    pub fn with_lz77(window_size: usize, lookahead_size: usize) -> Result<Self> {
        Ok(Self {
            lz77: Lz77Config::new(window_size, lookahead_size)?,
        })
    }
}

/// Build the codec for `algorithm`.
///
/// Fails only if the options carry an invalid LZ77 configuration.
pub fn codec_for(algorithm: Algorithm, options: &CodecOptions) -> Result<Box<dyn Codec>> {
    Ok(match algorithm {
        Algorithm::Huffman => Box::new(HuffmanCodec::new()),
        Algorithm::Rle => Box::new(RleCodec::new()),
        Algorithm::Lz77 => Box::new(Lz77Codec::new(options.lz77)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_algorithm_maps_to_itself() {
        let options = CodecOptions::default();
        for algorithm in Algorithm::ALL {
            let codec = codec_for(algorithm, &options).unwrap();
            assert_eq!(codec.algorithm(), algorithm);
        }
    }

    #[test]
    fn test_invalid_lz77_options() {
        let options = CodecOptions {
            lz77: Lz77Config {
                window_size: 0,
                lookahead_size: 16,
            },
        };
        assert!(codec_for(Algorithm::Lz77, &options).is_err());
        assert!(codec_for(Algorithm::Rle, &options).is_ok());
        assert!(CodecOptions::with_lz77(1024, 300).is_err());
    }
}
