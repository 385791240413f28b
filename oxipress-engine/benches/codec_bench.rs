//! Throughput benchmarks for the OxiPress codecs.
//!
//! Covers each codec on inputs that favour one codec each, the LZ77 match
//! finder against the exhaustive scan, and the parallel compare.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxipress_engine::{Algorithm, CodecOptions, codec_for, compress_all};
use oxipress_lz77::{Lz77Codec, Lz77Config, find_longest_match_brute_force};
use std::hint::black_box;

const INPUT_SIZE: usize = 64 * 1024;

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }
}

/// Byte runs of 1 to 300, so RLE sees both short and capped runs.
fn runs(size: usize) -> Vec<u8> {
    let mut rng = Lcg::new(3);
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let len = 1 + (rng.step() % 300) as usize;
        let value = rng.step() as u8;
        data.extend(std::iter::repeat_n(value, len.min(size - data.len())));
    }
    data
}

/// Four symbols at roughly 8:4:2:1, which Huffman codes in under two bits.
fn skewed(size: usize) -> Vec<u8> {
    let mut rng = Lcg::new(5);
    (0..size)
        .map(|_| match rng.step() % 15 {
            0..=7 => b'e',
            8..=11 => b't',
            12..=13 => b'a',
            _ => b'q',
        })
        .collect()
}

/// Words from a small vocabulary, giving LZ77 plenty of short back-references.
fn phrases(size: usize) -> Vec<u8> {
    const WORDS: [&[u8]; 8] = [
        b"window ",
        b"match ",
        b"literal ",
        b"record ",
        b"distance ",
        b"length ",
        b"bit ",
        b"symbol ",
    ];
    let mut rng = Lcg::new(7);
    let mut data = Vec::with_capacity(size + 16);
    while data.len() < size {
        data.extend_from_slice(WORDS[(rng.step() % 8) as usize]);
    }
    data.truncate(size);
    data
}

/// Incompressible bytes; every codec expands these.
fn noise(size: usize) -> Vec<u8> {
    let mut rng = Lcg::new(11);
    (0..size).map(|_| rng.step() as u8).collect()
}

const INPUTS: [(&str, fn(usize) -> Vec<u8>); 4] = [
    ("runs", runs),
    ("skewed", skewed),
    ("phrases", phrases),
    ("noise", noise),
];

fn bench_compress(c: &mut Criterion) {
    let options = CodecOptions::default();

    for algorithm in Algorithm::ALL {
        let codec = codec_for(algorithm, &options).expect("default options are valid");
        let mut group = c.benchmark_group(format!("{}_compress", algorithm));

        for (name, generate) in INPUTS {
            let data = generate(INPUT_SIZE);
            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
                b.iter(|| codec.compress(black_box(data)).expect("compress"));
            });
        }

        group.finish();
    }
}

fn bench_decompress(c: &mut Criterion) {
    let options = CodecOptions::default();

    for algorithm in Algorithm::ALL {
        let codec = codec_for(algorithm, &options).expect("default options are valid");
        let mut group = c.benchmark_group(format!("{}_decompress", algorithm));

        for (name, generate) in INPUTS {
            let data = generate(INPUT_SIZE);
            let compressed = codec.compress(&data).expect("compress");
            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(name), &compressed, |b, input| {
                b.iter(|| codec.decompress(black_box(input)).expect("decompress"));
            });
        }

        group.finish();
    }
}

/// Hash chains versus the exhaustive window scan over the same greedy parse.
fn bench_lz77_match_finder(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_match_finder");
    let config = Lz77Config::DEFAULT;
    let window = config.window_size;
    let data = phrases(16 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("hash_chain", |b| {
        let codec = Lz77Codec::new(config).expect("valid config");
        b.iter(|| codec.encode_records(black_box(&data)));
    });

    group.bench_function("brute_force", |b| {
        b.iter(|| {
            let mut pos = 0;
            let mut records = 0usize;
            while pos < data.len() {
                let max_len = config.lookahead_size.min(data.len() - pos - 1);
                let found = find_longest_match_brute_force(&data, pos, window, max_len);
                pos += found.map_or(1, |m| m.length + 1);
                records += 1;
            }
            records
        });
    });

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_all");
    let options = CodecOptions::default();

    for size in [4 * 1024, 256 * 1024] {
        let data = phrases(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| compress_all("bench.txt", black_box(data), &options));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compress,
    bench_decompress,
    bench_lz77_match_finder,
    bench_compare,
);
criterion_main!(benches);
