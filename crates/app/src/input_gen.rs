//! Sample-data generation.
//!
//! When `compress` is given no input file, we generate sample data with
//! interesting compression characteristics so the metrics summary shows
//! the codec doing real work.
//!
//! # Design
//!
//! Huffman gains come from symbol skew, so generated data alternates
//! between sections with very different byte distributions:
//! - single-byte runs (maximum skew, near-1-bit codes)
//! - small alphabets with geometric skew (the codec's sweet spot)
//! - repeating multi-byte patterns
//! - uniform random bytes (incompressible floor)
//!
//! All randomness is seeded ChaCha8, so a given seed always produces the
//! same bytes and runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `size_bytes` of sample data with mixed compressibility.
///
/// Deterministic for a given `(seed, size_bytes)` pair.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(rng.gen_range(512..=4096));

        match rng.gen_range(0..4) {
            0 => push_run(&mut rng, &mut data, section),
            1 => push_skewed_alphabet(&mut rng, &mut data, section),
            2 => push_pattern(&mut rng, &mut data, section),
            _ => push_random(&mut rng, &mut data, section),
        }
    }

    data.truncate(size_bytes);
    data
}

/// One byte value repeated for the whole section.
fn push_run(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    let byte: u8 = rng.gen();
    data.extend(std::iter::repeat(byte).take(len));
}

/// Small alphabet where each symbol is roughly half as likely as the
/// previous one, approximating the geometric skew Huffman codes best.
fn push_skewed_alphabet(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    let base: u8 = rng.gen_range(0..=255 - 16);
    for _ in 0..len {
        let mut offset = 0u8;
        while offset < 15 && rng.gen_bool(0.5) {
            offset += 1;
        }
        data.push(base + offset);
    }
}

/// A short random pattern tiled across the section.
fn push_pattern(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    let pattern: Vec<u8> = (0..rng.gen_range(4..=32)).map(|_| rng.gen()).collect();
    for i in 0..len {
        data.push(pattern[i % pattern.len()]);
    }
}

/// Uniform random bytes.
fn push_random(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, len: usize) {
    for _ in 0..len {
        data.push(rng.gen());
    }
}
