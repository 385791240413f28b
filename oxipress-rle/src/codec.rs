//! Run-length encoder and decoder.

use oxipress_core::error::{OxipressError, Result};
use oxipress_core::{Algorithm, Codec};

/// Longest run one record can describe.
pub const MAX_RUN: usize = u8::MAX as usize;

/// Size of one `(count, value)` record.
pub const RECORD_SIZE: usize = 2;

/// A run of `count` copies of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Repetitions, 1 to 255 when produced by the encoder.
    pub count: u8,
    /// The repeated byte.
    pub value: u8,
}

/// Whole-buffer run-length codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct RleCodec;

impl RleCodec {
    /// Create a new RLE codec.
    pub fn new() -> Self {
        Self
    }

    /// Split `data` into maximal runs of at most [`MAX_RUN`] bytes.
    pub fn runs(&self, data: &[u8]) -> Vec<Run> {
        let mut runs = Vec::new();
        let mut i = 0;

        while i < data.len() {
            let value = data[i];
            let mut run_len = 1;

            // Count consecutive identical bytes
            while i + run_len < data.len() && data[i + run_len] == value && run_len < MAX_RUN {
                run_len += 1;
            }

            runs.push(Run {
                count: run_len as u8,
                value,
            });
            i += run_len;
        }

        runs
    }

    /// Compress `data` into `(count, value)` records.
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let runs = self.runs(data);
        let mut output = Vec::with_capacity(runs.len() * RECORD_SIZE);
        for run in runs {
            output.push(run.count);
            output.push(run.value);
        }
        Ok(output)
    }

    /// Expand `(count, value)` records.
    ///
    /// A zero count expands to nothing.
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % RECORD_SIZE != 0 {
            return Err(OxipressError::truncated_record(data.len(), RECORD_SIZE));
        }

        let total: usize = data.chunks_exact(RECORD_SIZE).map(|r| r[0] as usize).sum();
        let mut output = Vec::with_capacity(total);
        for record in data.chunks_exact(RECORD_SIZE) {
            output.resize(output.len() + record[0] as usize, record[1]);
        }

        Ok(output)
    }
}

impl Codec for RleCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rle
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        RleCodec::compress(self, input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        RleCodec::decompress(self, input)
    }
}
