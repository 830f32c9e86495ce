//! Configuration for the huffpack command line.
//!
//! Handles parsing command-line arguments into a run configuration.
//!
//! # Philosophy
//!
//! `huffpack compress` should work with ZERO further arguments: with no
//! input file it compresses generated sample data, so the tool can
//! demonstrate itself. All resolved settings are printable so runs are
//! reproducible.

use std::path::PathBuf;

/// Which direction the codec runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Operation to perform
    pub mode: Mode,

    /// Input file path (None = generate sample data; compress only)
    pub input_file: Option<PathBuf>,

    /// Output file path (None = derive from the input path)
    pub output_file: Option<PathBuf>,

    /// Seed for sample-data generation
    pub seed: u64,

    /// Size of generated sample data in bytes
    pub sample_bytes: usize,

    /// Whether to print the metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name
    /// already stripped).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode: Option<Mode> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "compress" | "c" if mode.is_none() => {
                    mode = Some(Mode::Compress);
                }
                "decompress" | "d" if mode.is_none() => {
                    mode = Some(Mode::Decompress);
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                arg if !arg.starts_with('-') && input_file.is_none() && mode.is_some() => {
                    input_file = Some(PathBuf::from(arg));
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let mode = mode.ok_or("expected a command: compress or decompress")?;

        if mode == Mode::Decompress && input_file.is_none() {
            return Err("decompress requires an input file".to_string());
        }

        Ok(Config {
            mode,
            input_file,
            output_file,
            seed: seed.unwrap_or(42),
            sample_bytes: sample_bytes.unwrap_or(64 * 1024),
            print_metrics,
        })
    }
}

fn print_help() {
    println!("huffpack: lossless file compression with Huffman coding");
    println!();
    println!("USAGE:");
    println!("    huffpack compress   [INPUT] [OPTIONS]");
    println!("    huffpack decompress INPUT   [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --out <PATH>            Output file (default: derived from input)");
    println!("    --seed <N>              Seed for sample generation (default: 42)");
    println!("    --sample-bytes <N>      Sample size when no input given (default: 65536)");
    println!("    --no-metrics            Don't print the metrics summary");
    println!("    --help, -h              Print this help");
    println!();
    println!("DEFAULT OUTPUT NAMES:");
    println!("    compress   foo.txt      -> foo.txt.huff");
    println!("    decompress foo.txt.huff -> foo.txt");
    println!("    decompress foo.bin      -> foo.bin.out");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack compress                       # Compress generated sample data");
    println!("    huffpack compress file.bin              # -> file.bin.huff");
    println!("    huffpack decompress file.bin.huff       # -> file.bin");
    println!("    huffpack compress file.bin --out x.hf   # Explicit output path");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compress_with_input() {
        let config = Config::from_args(&args(&["compress", "file.bin"])).unwrap();
        assert_eq!(config.mode, Mode::Compress);
        assert_eq!(config.input_file, Some(PathBuf::from("file.bin")));
        assert!(config.output_file.is_none());
        assert!(config.print_metrics);
    }

    #[test]
    fn test_compress_without_input_uses_sample() {
        let config = Config::from_args(&args(&["compress", "--sample-bytes", "1000"])).unwrap();
        assert!(config.input_file.is_none());
        assert_eq!(config.sample_bytes, 1000);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_decompress_requires_input() {
        assert!(Config::from_args(&args(&["decompress"])).is_err());
        let config = Config::from_args(&args(&["d", "file.huff"])).unwrap();
        assert_eq!(config.mode, Mode::Decompress);
        assert_eq!(config.input_file, Some(PathBuf::from("file.huff")));
    }

    #[test]
    fn test_missing_command() {
        assert!(Config::from_args(&args(&["file.bin"])).is_err());
        assert!(Config::from_args(&args(&[])).is_err());
    }

    #[test]
    fn test_flag_values() {
        let config = Config::from_args(&args(&[
            "compress", "in.bin", "--out", "out.hf", "--seed", "7", "--no-metrics",
        ]))
        .unwrap();
        assert_eq!(config.output_file, Some(PathBuf::from("out.hf")));
        assert_eq!(config.seed, 7);
        assert!(!config.print_metrics);
    }

    #[test]
    fn test_dangling_flag_value() {
        assert!(Config::from_args(&args(&["compress", "--out"])).is_err());
        assert!(Config::from_args(&args(&["compress", "--seed", "notanumber"])).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        assert!(Config::from_args(&args(&["compress", "--bogus"])).is_err());
    }
}
