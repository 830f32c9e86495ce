//! Metrics collection and reporting for compress/decompress runs.
//!
//! This module provides observable insights into codec behavior:
//! - Throughput (bytes in/out)
//! - Compression ratio
//! - Container breakdown (tree bytes, padding bits)
//! - Timing information
//!
//! # Design
//!
//! Metrics are collected in a simple struct with explicit updates around
//! the codec calls. The codec itself stays pure; the caller fills in what
//! it knows (byte counts, header fields) and asks for derived rates.
//!
//! # Thread Safety
//!
//! `CodecMetrics` is NOT thread-safe; the codec is single-threaded and so
//! is its reporting.

use std::time::{Duration, Instant};

/// Metrics for one compress or decompress run.
#[derive(Debug, Clone)]
pub struct CodecMetrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Input/Output ===
    /// Bytes read from the input file
    pub input_bytes: u64,

    /// Bytes written to the output file
    pub output_bytes: u64,

    // === Container breakdown ===
    /// Serialized tree size in bytes (from the container header)
    pub tree_bytes: u64,

    /// Padding bits in the last payload byte (from the container header)
    pub padding_bits: u8,
}

impl CodecMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            output_bytes: 0,
            tree_bytes: 0,
            padding_bits: 0,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Compression ratio (output / input).
    ///
    /// Returns 0.0 if no input was processed. Above 1.0 means the
    /// container grew, which is expected on tiny or incompressible input.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Container overhead: header plus tree, in bytes.
    pub fn overhead_bytes(&self) -> u64 {
        2 + self.tree_bytes
    }

    /// Throughput in input bytes/second.
    pub fn throughput_bps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.input_bytes as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self, label: &str) {
        println!("\n=== {} Summary ===", label);
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("Input:  {} bytes ({:.2} KiB)", self.input_bytes, self.input_bytes as f64 / 1024.0);
        println!("Output: {} bytes ({:.2} KiB)", self.output_bytes, self.output_bytes as f64 / 1024.0);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!();

        println!("=== Container ===");
        println!("Header + tree overhead: {} bytes", self.overhead_bytes());
        println!("Padding bits: {}", self.padding_bits);
        println!();

        println!("=== Performance ===");
        println!("Throughput: {:.2} MB/s", self.throughput_bps() / 1_000_000.0);
        println!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_bytes={}\n\
             output_bytes={}\n\
             compression_ratio={:.4}\n\
             tree_bytes={}\n\
             padding_bits={}\n",
            self.duration().as_millis(),
            self.input_bytes,
            self.output_bytes,
            self.compression_ratio(),
            self.tree_bytes,
            self.padding_bits,
        )
    }
}

impl Default for CodecMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = CodecMetrics::new();
        assert!(metrics.end_time.is_none());
        assert!(metrics.duration().as_millis() < 100); // Should be recent
    }

    #[test]
    fn test_compression_ratio() {
        let mut metrics = CodecMetrics::new();
        metrics.input_bytes = 1000;
        metrics.output_bytes = 750;

        assert_eq!(metrics.compression_ratio(), 0.75);
    }

    #[test]
    fn test_ratio_guards_empty_input() {
        let mut metrics = CodecMetrics::new();
        metrics.output_bytes = 2;
        assert_eq!(metrics.compression_ratio(), 0.0);
    }

    #[test]
    fn test_overhead() {
        let mut metrics = CodecMetrics::new();
        metrics.tree_bytes = 8;
        assert_eq!(metrics.overhead_bytes(), 10);
    }

    #[test]
    fn test_throughput() {
        let mut metrics = CodecMetrics::new();
        metrics.input_bytes = 1_000_000;

        std::thread::sleep(Duration::from_millis(50));
        metrics.complete();

        assert!(metrics.throughput_bps() > 0.0);
    }

    #[test]
    fn test_export_text() {
        let mut metrics = CodecMetrics::new();
        metrics.input_bytes = 1000;
        metrics.output_bytes = 640;
        metrics.tree_bytes = 12;
        metrics.padding_bits = 5;

        let text = metrics.export_text();
        assert!(text.contains("input_bytes=1000"));
        assert!(text.contains("output_bytes=640"));
        assert!(text.contains("tree_bytes=12"));
        assert!(text.contains("padding_bits=5"));
    }
}
