//! Huffarc CLI
//!
//! A Pure Rust file compressor built on tree-coded Huffman compression:
//! the code tree derived from the input's byte distribution is embedded in
//! the output, so compressed files are fully self-describing.

mod utils;

use clap::{Parser, Subcommand};
use huffarc_core::{BitReader, BitWriter};
use huffarc_huff::header::read_tree;
use huffarc_huff::{SYMBOL_COUNT, decode_huff, encode_huff};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use utils::{create_progress_bar, ratio_percent};

#[derive(Parser)]
#[command(name = "huffarc")]
#[command(author, version, about = "Pure Rust Huffman file compression")]
#[command(long_about = "
Huffarc compresses files with an adaptive Huffman code derived from the
input's own byte distribution. The code tree travels inside the output,
so no external dictionary is needed to decompress.

Examples:
  huffarc compress document.txt document.huf
  huffarc decompress document.huf document.txt
  huffarc test document.huf
  huffarc info document.huf
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Compressed output file
        output: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Decompressed output file
        output: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Test compressed file integrity
    #[command(alias = "t")]
    Test {
        /// Compressed file to test
        input: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show information about a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            verbose,
            progress,
        } => cmd_compress(&input, &output, verbose, progress),
        Commands::Decompress {
            input,
            output,
            verbose,
            progress,
        } => cmd_decompress(&input, &output, verbose, progress),
        Commands::Test { input, verbose } => cmd_test(&input, verbose),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &PathBuf,
    output: &PathBuf,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let in_file = File::open(input)?;
    let original_size = in_file.metadata()?.len();
    let mut reader = BitReader::new(BufReader::new(in_file));

    let out_file = File::create(output)?;
    let mut writer = BitWriter::new(BufWriter::new(out_file));

    let pb = create_progress_bar(1, progress);
    pb.set_message("Compressing");

    let bits_written = encode_huff(&mut reader, &mut writer)?;
    writer.into_inner()?.flush()?;

    pb.inc(1);
    pb.finish_with_message("Done");

    let compressed_size = bits_written / 8;
    println!(
        "Compressed {} -> {}",
        input.display(),
        output.display()
    );
    println!("  Original size: {} bytes", original_size);
    println!("  Compressed size: {} bytes", compressed_size);
    println!(
        "  Compression ratio: {:.1}%",
        ratio_percent(original_size, compressed_size)
    );
    if verbose {
        println!("  Bits written: {}", bits_written);
    }

    Ok(())
}

fn cmd_decompress(
    input: &PathBuf,
    output: &PathBuf,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let in_file = File::open(input)?;
    let compressed_size = in_file.metadata()?.len();
    let mut reader = BitReader::new(BufReader::new(in_file));

    let out_file = File::create(output)?;
    let mut writer = BufWriter::new(out_file);

    let pb = create_progress_bar(1, progress);
    pb.set_message("Decompressing");

    let bytes_written = decode_huff(&mut reader, &mut writer)?;
    writer.flush()?;

    pb.inc(1);
    pb.finish_with_message("Done");

    println!(
        "Decompressed {} -> {}",
        input.display(),
        output.display()
    );
    println!("  Compressed size: {} bytes", compressed_size);
    println!("  Decompressed size: {} bytes", bytes_written);
    if verbose {
        println!(
            "  Compression ratio: {:.1}%",
            ratio_percent(bytes_written, compressed_size)
        );
    }

    Ok(())
}

fn cmd_test(input: &PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let in_file = File::open(input)?;
    let mut reader = BitReader::new(BufReader::new(in_file));

    println!("Testing {}", input.display());

    match decode_huff(&mut reader, &mut std::io::sink()) {
        Ok(bytes) => {
            if verbose {
                println!("  OK: {} bytes decode cleanly", bytes);
            }
            println!();
            println!("File OK");
            Ok(())
        }
        Err(e) => {
            println!("  FAILED: {}", e);
            std::process::exit(2);
        }
    }
}

fn cmd_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let in_file = File::open(input)?;
    let file_size = in_file.metadata()?.len();
    let mut reader = BitReader::new(BufReader::new(in_file));

    let tree = read_tree(&mut reader)?;
    let header_bits = reader.bit_position();
    let codes = tree.codes();

    let min_len = codes.lengths().min().unwrap_or(0);
    let max_len = codes.lengths().max().unwrap_or(0);
    let total_len: usize = codes.lengths().sum();

    println!("Compressed File Information");
    println!("===========================");
    println!("File: {}", input.display());
    println!("Size: {} bytes", file_size);
    println!();
    println!("Code tree:");
    println!("  Symbols: {}", SYMBOL_COUNT);
    println!("  Header size: {} bits", header_bits);
    println!("  Code lengths: {}..{} bits", min_len, max_len);
    println!(
        "  Average code length: {:.1} bits",
        total_len as f64 / SYMBOL_COUNT as f64
    );

    Ok(())
}
