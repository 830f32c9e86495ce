//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! Decompression has no partial-recovery mode: any format error aborts the
//! operation, and whatever was written before the error is incomplete.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: reading bits past the end of a buffer
/// - Huffman: code table construction failures
/// - Format: corrupt or truncated compressed containers
/// - I/O: file system operations (app layer)
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., reading past end of payload)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Huffman code table construction failed
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Compressed container is corrupt or truncated
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream")]
    UnexpectedEof,

    /// Requested more bits than the transfer type holds
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),
}

/// Huffman code construction errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// A code exceeds the 32-bit storage width.
    ///
    /// Reachable only with pathologically skewed frequency distributions
    /// over 30+ distinct symbols.
    #[error("code length {length} exceeds maximum 32")]
    CodeTooLong { length: usize },
}

/// Compressed container format errors.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Container is too short to hold the 2-byte header
    #[error("truncated header: need 2 bytes, got {actual}")]
    TruncatedHeader { actual: usize },

    /// Serialized tree exceeds the 13-bit size field
    #[error("serialized tree size {size} exceeds maximum 8191")]
    TreeTooLarge { size: usize },

    /// Unexpected tag byte during tree deserialization
    #[error("invalid tree tag {tag:#04x} at offset {offset}")]
    InvalidTag { tag: u8, offset: usize },

    /// Tree region ended while a subtree was still expected
    #[error("truncated tree: need {required} bytes, got {actual}")]
    TruncatedTree { required: usize, actual: usize },

    /// Tree structure terminated before consuming the declared tree region
    #[error("tree size mismatch: header says {expected} bytes, tree ended after {actual}")]
    TreeSizeMismatch { expected: usize, actual: usize },

    /// Header declares an empty tree but payload bytes follow
    #[error("payload present but tree is empty")]
    PayloadWithoutTree,

    /// Payload ended in the middle of a code, or padding exceeds the payload
    #[error("truncated payload: bit stream ends mid-code")]
    TruncatedPayload,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
