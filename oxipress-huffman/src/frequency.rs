//! Byte frequency tables.

use oxipress_core::error::{OxipressError, Result};

/// Occurrence count for each of the 256 byte values.
///
/// Counts are 32-bit because that is what the compressed header stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; 256],
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count every byte of `data`.
    ///
    /// Fails with `InputTooLarge` if a count could overflow the 32-bit field.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let len = data.len() as u64;
        if len > u32::MAX as u64 {
            return Err(OxipressError::input_too_large(len, u32::MAX as u64));
        }

        let mut counts = [0u32; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Ok(Self { counts })
    }

    /// Set the count for `symbol`.
    pub fn set(&mut self, symbol: u8, count: u32) {
        self.counts[symbol as usize] = count;
    }

    /// Count for `symbol`.
    pub fn get(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    /// Number of byte values with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Whether no byte value occurs.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Present symbols and their counts, in ascending byte order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
