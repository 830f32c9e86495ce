//! huffpack: command-line Huffman file compressor.
//!
//! Thin glue around `huffpack-core`: resolve the configuration, read the
//! input (or generate sample data), run the codec, write the output, and
//! report metrics. Failed runs leave any partial output file in place.

mod config;
mod input_gen;
mod paths;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use huffpack_core::metrics::CodecMetrics;
use huffpack_core::{container, Result};

use config::{Config, Mode};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("try: huffpack --help");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let mut metrics = CodecMetrics::new();

    // Resolve input bytes and the output path
    let (input, output_path) = match (&config.input_file, config.mode) {
        (Some(path), Mode::Compress) => {
            let output = config.output_file.clone().unwrap_or_else(|| paths::compressed_path(path));
            (fs::read(path)?, output)
        }
        (Some(path), Mode::Decompress) => {
            let output = config
                .output_file
                .clone()
                .unwrap_or_else(|| paths::decompressed_path(path));
            (fs::read(path)?, output)
        }
        (None, Mode::Compress) => {
            println!(
                "no input file; compressing {} bytes of generated sample data (seed {})",
                config.sample_bytes, config.seed
            );
            let output = config.output_file.clone().unwrap_or_else(|| PathBuf::from("sample.huff"));
            (input_gen::generate_sample_data(config.seed, config.sample_bytes), output)
        }
        (None, Mode::Decompress) => unreachable!("rejected during argument parsing"),
    };

    metrics.input_bytes = input.len() as u64;

    let output = match config.mode {
        Mode::Compress => container::compress(&input)?,
        Mode::Decompress => container::decompress(&input)?,
    };

    metrics.output_bytes = output.len() as u64;

    // The container header describes tree and padding on either direction
    let container_bytes = match config.mode {
        Mode::Compress => &output,
        Mode::Decompress => &input,
    };
    if let Ok((padding, tree_size)) = container::parse_header(container_bytes) {
        metrics.padding_bits = padding;
        metrics.tree_bytes = tree_size as u64;
    }

    fs::write(&output_path, &output)?;
    metrics.complete();

    println!("{} -> {}", describe_input(config), output_path.display());

    if config.print_metrics {
        let label = match config.mode {
            Mode::Compress => "Compression",
            Mode::Decompress => "Decompression",
        };
        metrics.print_summary(label);
    }

    Ok(())
}

fn describe_input(config: &Config) -> String {
    match &config.input_file {
        Some(path) => path.display().to_string(),
        None => format!("<sample seed={}>", config.seed),
    }
}
