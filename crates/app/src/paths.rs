//! Output-path derivation.
//!
//! Explicit functions taking and returning owned paths; no process-wide
//! filename buffers. Compression appends the container suffix; the
//! decompressed name comes from stripping it again, so
//! `foo.tar -> foo.tar.huff -> foo.tar` keeps the inner extension intact.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to compressed containers.
pub const SUFFIX: &str = ".huff";

/// Fallback suffix when a decompression input lacks [`SUFFIX`].
const FALLBACK_SUFFIX: &str = ".out";

/// Default output path for `compress`: append `.huff` to the whole name.
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(SUFFIX);
    PathBuf::from(name)
}

/// Default output path for `decompress`: strip a trailing `.huff`, or
/// append `.out` when the input is not named like a container.
pub fn decompressed_path(input: &Path) -> PathBuf {
    if let Some(stem) = input.to_str().and_then(|s| s.strip_suffix(SUFFIX)) {
        if !stem.is_empty() {
            return PathBuf::from(stem);
        }
    }
    let mut name = OsString::from(input.as_os_str());
    name.push(FALLBACK_SUFFIX);
    PathBuf::from(name)
}
