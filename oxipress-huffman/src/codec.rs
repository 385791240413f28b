//! Huffman compressor and decompressor.

use crate::frequency::FrequencyTable;
use crate::header::HuffmanHeader;
use crate::tree::HuffmanTree;
use oxipress_core::error::{OxipressError, Result};
use oxipress_core::{Algorithm, Codec, MsbBitReader, MsbBitWriter};

/// Whole-buffer Huffman codec.
///
/// Stateless: a single instance can be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a new Huffman codec.
    pub fn new() -> Self {
        Self
    }

    /// Compress `input`.
    ///
    /// Empty input produces an empty buffer with no header.
    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let frequencies = FrequencyTable::from_bytes(input)?;
        let Some(tree) = HuffmanTree::build(&frequencies) else {
            return Ok(Vec::new());
        };
        let codes = tree.code_table();

        let total_bits = codes.encoded_bits(&frequencies);
        if total_bits > u32::MAX as u64 {
            return Err(OxipressError::input_too_large(total_bits, u32::MAX as u64));
        }

        let header = HuffmanHeader {
            frequencies,
            bit_length: total_bits as u32,
        };
        let payload_len = header.payload_len();
        let mut output = Vec::with_capacity(header.encoded_len() + payload_len);
        header.write_to(&mut output);

        let mut writer = MsbBitWriter::with_capacity(payload_len);
        for &byte in input {
            let code = codes.get(byte).ok_or_else(|| {
                OxipressError::corrupt_stream(
                    writer.bits_written(),
                    format!("no code for byte {:#04x}", byte),
                )
            })?;
            writer.write_bits(code.bits, code.len);
        }
        debug_assert_eq!(writer.bits_written(), total_bits);

        output.extend_from_slice(&writer.finish());
        Ok(output)
    }

    /// Decompress a buffer produced by [`HuffmanCodec::compress`].
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let (header, offset) = HuffmanHeader::parse(input)?;
        let bit_length = header.bit_length as u64;
        let expected = header.frequencies.total();

        let Some(tree) = HuffmanTree::build(&header.frequencies) else {
            if bit_length != 0 {
                return Err(OxipressError::corrupt_stream(
                    0,
                    "bits present but no symbols declared",
                ));
            }
            return Ok(Vec::new());
        };

        // Every symbol costs at least one bit.
        if expected > bit_length {
            return Err(OxipressError::corrupt_stream(
                bit_length,
                format!(
                    "{} symbols declared but only {} bits present",
                    expected, bit_length
                ),
            ));
        }

        let mut reader = MsbBitReader::with_bit_limit(&input[offset..], bit_length)?;
        let mut output = Vec::with_capacity(expected as usize);
        let root = tree.root();
        let mut node = root;

        while !reader.is_exhausted() {
            let position = reader.bits_read();
            let bit = reader.read_bit()?;

            if let Some(symbol) = tree.symbol(root) {
                // Single-symbol stream: every code is the one-bit "0".
                if bit {
                    return Err(OxipressError::corrupt_stream(
                        position,
                        "non-zero bit in single-symbol stream",
                    ));
                }
                output.push(symbol);
                continue;
            }

            node = tree.child(node, bit).ok_or_else(|| {
                OxipressError::corrupt_stream(position, "traversal reached a null child")
            })?;
            if let Some(symbol) = tree.symbol(node) {
                output.push(symbol);
                node = root;
            }
        }

        if node != root {
            return Err(OxipressError::corrupt_stream(
                reader.bits_read(),
                "bit stream ends inside a code",
            ));
        }
        if output.len() as u64 != expected {
            return Err(OxipressError::corrupt_stream(
                reader.bits_read(),
                format!(
                    "decoded {} symbols, header declares {}",
                    output.len(),
                    expected
                ),
            ));
        }

        Ok(output)
    }
}

impl Codec for HuffmanCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        HuffmanCodec::compress(self, input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        HuffmanCodec::decompress(self, input)
    }
}
