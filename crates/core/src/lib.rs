//! huffpack-core: lossless file compression built on Huffman coding
//!
//! This library provides the core components of a byte-oriented Huffman
//! compressor:
//! - Counts byte frequencies in a single pass
//! - Builds a minimum-redundancy prefix tree over the observed symbols
//! - Serializes the tree into a compact, self-describing container
//! - Bit-packs the payload with exact trailing-padding accounting
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `bitio`: low-level MSB-first bit reading/writing
//! - `freq`: byte-frequency histogram
//! - `tree`: Huffman tree construction
//! - `codes`: codeword assignment and bit accounting
//! - `container`: header/tree wire format and the compress/decompress
//!   entry points
//! - `metrics`: observable codec behavior
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Exact round-trip**: `decompress(compress(x)) == x` for every byte
//!   string, including empty and single-symbol inputs
//! - **Pure codec**: the library works on in-memory slices; file handling
//!   and reporting belong to the caller

pub mod bitio;
pub mod codes;
pub mod container;
pub mod error;
pub mod freq;
pub mod metrics;
pub mod tree;

// Re-export commonly used types
pub use container::{compress, decompress};
pub use error::{Error, Result};
