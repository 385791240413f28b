//! LZ77 compressor and decompressor.

use crate::config::Lz77Config;
use crate::matcher::MatchFinder;
use crate::record::{Lz77Record, RECORD_SIZE};
use oxipress_core::error::{OxipressError, Result};
use oxipress_core::{Algorithm, Codec};

/// Whole-buffer LZ77 codec with a fixed window and lookahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz77Codec {
    config: Lz77Config,
}

impl Lz77Codec {
    /// Create a codec, validating `config`.
    pub fn new(config: Lz77Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> Lz77Config {
        self.config
    }

    /// Split `input` into records using greedy longest-match parsing.
    ///
    /// Match length is capped so that a real input byte always follows the
    /// match and becomes the record's literal.
    pub fn encode_records(&self, input: &[u8]) -> Vec<Lz77Record> {
        let mut finder = MatchFinder::new(input, self.config.window_size);
        let mut records = Vec::new();
        let mut pos = 0;

        while pos < input.len() {
            let max_len = self.config.lookahead_size.min(input.len() - pos - 1);

            match finder.find(pos, max_len) {
                Some(m) => {
                    // Bounded by the validated window and lookahead sizes.
                    records.push(Lz77Record::back_reference(
                        m.distance as u16,
                        m.length as u8,
                        input[pos + m.length],
                    ));
                    pos += m.length + 1;
                }
                None => {
                    records.push(Lz77Record::literal(input[pos]));
                    pos += 1;
                }
            }
        }

        records
    }

    /// Compress `input` into 4-byte records.
    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let records = self.encode_records(input);
        let mut output = Vec::with_capacity(records.len() * RECORD_SIZE);
        for record in records {
            output.extend_from_slice(&record.to_bytes());
        }
        Ok(output)
    }

    /// Decompress a record stream.
    ///
    /// Back-references are copied one byte at a time from the output being
    /// built, so a copy may read bytes it has just written.
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.len() % RECORD_SIZE != 0 {
            return Err(OxipressError::truncated_record(input.len(), RECORD_SIZE));
        }

        let mut output = Vec::with_capacity(input.len());
        for chunk in input.chunks_exact(RECORD_SIZE) {
            let record = Lz77Record::from_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);

            if !record.is_literal() {
                let distance = record.distance as usize;
                if distance == 0 || distance > output.len() {
                    return Err(OxipressError::invalid_back_reference(
                        distance,
                        output.len(),
                    ));
                }

                let start = output.len() - distance;
                for i in 0..record.length as usize {
                    let byte = output[start + i];
                    output.push(byte);
                }
            }

            output.push(record.literal);
        }

        Ok(output)
    }
}

impl Codec for Lz77Codec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz77
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Lz77Codec::compress(self, input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Lz77Codec::decompress(self, input)
    }
}
