//! Integration tests for Huffman coding.

use oxipress_core::{Codec, OxipressError};
use oxipress_huffman::{HuffmanCodec, HuffmanHeader, compress, decompress};
use proptest::prelude::*;

fn lcg_bytes(size: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..size)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 33) as u8
        })
        .collect()
}

#[test]
fn test_single_symbol_vector() {
    let compressed = compress(&[7u8; 5]).unwrap();
    let (header, offset) = HuffmanHeader::parse(&compressed).unwrap();
    assert_eq!(header.frequencies.distinct(), 1);
    assert_eq!(header.frequencies.get(7), 5);
    assert_eq!(header.bit_length, 5);
    assert_eq!(compressed.len(), offset + 1);
    assert_eq!(decompress(&compressed).unwrap(), vec![7u8; 5]);
}

#[test]
fn test_single_byte() {
    let compressed = compress(b"A").unwrap();
    assert_eq!(decompress(&compressed).unwrap(), b"A");
}

#[test]
fn test_pseudo_random_buffers() {
    for (size, seed) in [(1usize, 1u64), (255, 2), (4096, 3), (20_000, 4)] {
        let data = lcg_bytes(size, seed);
        let compressed = compress(&data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data, "size {size}");
    }
}

#[test]
fn test_skewed_distribution_compresses() {
    let mut data = vec![b' '; 8000];
    data.extend(lcg_bytes(500, 9));
    let compressed = compress(&data).unwrap();
    assert!(compressed.len() < data.len() / 3);
    assert_eq!(decompress(&compressed).unwrap(), data);
}

#[test]
fn test_through_trait_object() {
    let codec: Box<dyn Codec> = Box::new(HuffmanCodec::new());
    assert_eq!(codec.algorithm().name(), "huffman");
    let data = b"trait objects work too";
    let compressed = codec.compress(data).unwrap();
    assert_eq!(codec.decompress(&compressed).unwrap(), data);
}

#[test]
fn test_garbage_is_rejected_not_panicking() {
    for len in 0..64 {
        let garbage = lcg_bytes(len, len as u64 + 100);
        // Any outcome is fine as long as it is a value, not a panic.
        match decompress(&garbage) {
            Ok(_) => {}
            Err(e) if e.is_codec_error() => {}
            Err(other) => panic!("unexpected error kind: {other}"),
        }
    }
}

proptest! {
    #[test]
    fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let compressed = compress(&data).unwrap();
        prop_assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_deterministic(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(compress(&data).unwrap(), compress(&data).unwrap());
    }

    #[test]
    fn prop_repeated_byte(byte in any::<u8>(), count in 1usize..600) {
        let data = vec![byte; count];
        let compressed = compress(&data).unwrap();
        let (header, _) = HuffmanHeader::parse(&compressed).unwrap();
        prop_assert_eq!(header.bit_length as usize, count);
        prop_assert_eq!(decompress(&compressed).unwrap(), data);
    }
}
