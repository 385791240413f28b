//! OxiPress CLI - lossless byte codecs from the command line
//!
//! Compresses and decompresses single files with Huffman, RLE or LZ77, and
//! compares all three on the same input.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{AlgorithmArg, cmd_compare, cmd_compress, cmd_decompress};
use oxipress_engine::{CodecOptions, Lz77Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxipress")]
#[command(author, version, about = "Pure Rust Huffman, RLE and LZ77 codecs")]
#[command(long_about = "
OxiPress compresses files with one of three lossless byte codecs:
Huffman, RLE and LZ77.

Examples:
  oxipress compress notes.txt -a huffman
  oxipress compress notes.txt -a lz77 --window 8192 --lookahead 32
  oxipress decompress notes.txt_huffman.bin -a huffman
  oxipress compare notes.txt --verify
  oxipress compare notes.txt --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file, writing <FILE>_<algorithm>.bin
    #[command(alias = "c")]
    Compress {
        /// File to compress
        file: PathBuf,

        /// Compression algorithm
        #[arg(short, long, value_enum)]
        algorithm: AlgorithmArg,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        lz77: Lz77Args,

        /// Output the report as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Decompress a file produced by `compress`
    #[command(alias = "d")]
    Decompress {
        /// Compressed file
        file: PathBuf,

        /// Algorithm the file was compressed with
        #[arg(short, long, value_enum)]
        algorithm: AlgorithmArg,

        /// Output file (defaults to <stem>_<algorithm>_dec<.ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output the report as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Compress a file with every algorithm and compare the results
    Compare {
        /// File to compare on
        file: PathBuf,

        #[command(flatten)]
        lz77: Lz77Args,

        /// Output the comparison as JSON
        #[arg(short, long)]
        json: bool,

        /// Also decompress each result and check it matches the input
        #[arg(long)]
        verify: bool,
    },
}

/// LZ77 tuning flags.
#[derive(clap::Args)]
struct Lz77Args {
    /// LZ77 search window in bytes (1-65535)
    #[arg(long, default_value_t = Lz77Config::DEFAULT.window_size)]
    window: usize,

    /// LZ77 maximum match length (1-255)
    #[arg(long, default_value_t = Lz77Config::DEFAULT.lookahead_size)]
    lookahead: usize,
}

impl Lz77Args {
    fn options(&self) -> Result<CodecOptions, Box<dyn std::error::Error>> {
        Ok(CodecOptions::with_lz77(self.window, self.lookahead)?)
    }
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let quiet = cli.quiet;
    let result = match cli.command {
        Commands::Compress {
            file,
            algorithm,
            output,
            lz77,
            json,
        } => lz77.options().and_then(|options| {
            cmd_compress(
                &file,
                algorithm.into(),
                output.as_deref(),
                &options,
                json,
                quiet,
            )
        }),
        Commands::Decompress {
            file,
            algorithm,
            output,
            json,
        } => cmd_decompress(&file, algorithm.into(), output.as_deref(), json, quiet),
        Commands::Compare {
            file,
            lz77,
            json,
            verify,
        } => lz77
            .options()
            .and_then(|options| cmd_compare(&file, &options, json, verify, quiet)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
