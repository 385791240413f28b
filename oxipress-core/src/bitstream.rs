//! MSB-first bit stream operations.
//!
//! Codes are packed from the most significant bit of each byte downwards and
//! the final byte is zero-padded. The reader is bounded by an explicit bit
//! count, so padding bits are never mistaken for data.

use crate::error::{OxipressError, Result};

/// MSB-first bit writer.
#[derive(Debug)]
pub struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (MSB-first, low `bits_in_buffer` bits are pending).
    buffer: u64,
    /// Number of pending bits in buffer, always < 8 between calls.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits: u64,
}

impl MsbBitWriter {
    /// Create a new MSB bit writer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            buffer: 0,
            bits_in_buffer: 0,
            total_bits: 0,
        }
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.push(bit as u64, 1);
    }

    /// Write the low `count` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u64, count: u8) {
        let count = count.min(64);
        if count > 32 {
            let low = count - 32;
            self.push(value >> low, 32);
            self.push(value, low);
        } else if count > 0 {
            self.push(value, count);
        }
    }

    #[inline]
    fn push(&mut self, value: u64, count: u8) {
        let mask = (1u64 << count) - 1;
        self.buffer = (self.buffer << count) | (value & mask);
        self.bits_in_buffer += count;
        self.total_bits += count as u64;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
    }

    /// Total number of bits written so far (excluding padding).
    pub fn bits_written(&self) -> u64 {
        self.total_bits
    }

    /// Flush pending bits, zero-padding the final byte, and return the output.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            let byte = ((self.buffer << remaining) & 0xFF) as u8;
            self.output.push(byte);
            self.bits_in_buffer = 0;
        }
        self.output
    }
}

impl Default for MsbBitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// MSB-first bit reader limited to a fixed number of bits.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Number of meaningful bits in `data`.
    bit_limit: u64,
    /// Next bit to read.
    position: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a reader over every bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_limit: data.len() as u64 * 8,
            position: 0,
        }
    }

    /// Create a reader over the first `bit_limit` bits of `data`.
    ///
    /// Fails if `data` is too short to hold that many bits.
    pub fn with_bit_limit(data: &'a [u8], bit_limit: u64) -> Result<Self> {
        let available = data.len() as u64 * 8;
        if bit_limit > available {
            return Err(OxipressError::malformed_header(format!(
                "bit length {} needs {} bytes, only {} available",
                bit_limit,
                bit_limit.div_ceil(8),
                data.len()
            )));
        }
        Ok(Self {
            data,
            bit_limit,
            position: 0,
        })
    }

    /// Read one bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.position >= self.bit_limit {
            return Err(OxipressError::corrupt_stream(
                self.position,
                "bit stream exhausted",
            ));
        }
        let byte = self.data[(self.position / 8) as usize];
        let bit = (byte >> (7 - (self.position % 8))) & 1 == 1;
        self.position += 1;
        Ok(bit)
    }

    /// Read `count` bits (at most 64), most significant first.
    pub fn read_bits(&mut self, count: u8) -> Result<u64> {
        let mut value = 0u64;
        for _ in 0..count.min(64) {
            value = (value << 1) | self.read_bit()? as u64;
        }
        Ok(value)
    }

    /// Bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.position
    }

    /// Bits left before the limit.
    pub fn bits_remaining(&self) -> u64 {
        self.bit_limit - self.position
    }

    /// Whether every meaningful bit has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.bit_limit
    }
}
