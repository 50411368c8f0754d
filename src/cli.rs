//! Command line front end.
//!
//! > `huffpack compress <input> [-o <output>]`
//!
//! writes the container next to the input (`<input>.huffman`) unless an output
//! path is given, and prints the compression ratio.
//!
//! > `huffpack decompress <input> [-o <output>]`
//!
//! swaps the `.huffman` suffix for `.decompressed` unless an output path is
//! given. Nothing is written unless the integrity check passes.
//!
//! > `huffpack test <input>`
//!
//! compresses and decompresses in memory and reports whether the round trip
//! reproduced the file. Nothing is written.
//!
//! Every command accepts `--config <file>`, a JSON [`Config`] that changes the
//! default suffixes. Set `RUST_LOG=debug` to see the pipeline stages.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use huffpack::Config;

pub mod decode;
pub mod encode;
pub mod test;

/// CLI arguments for huffpack
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load output naming from a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_file(path).with_context(|| "couldn't load config file"),
            None => Ok(Config::default()),
        }
    }
}

/// Supported commands for huffpack
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a text file
    #[command(alias = "enc", alias = "encode")]
    Compress(EncodeArgs),

    /// Decompress and verify a compressed file
    #[command(alias = "dec", alias = "decode")]
    Decompress(DecodeArgs),

    /// Test the compression/decompression roundtrip of a file in memory
    Test(TestArgs),
}

/// Arguments specific to the compress command
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Path to the input text file
    pub input: PathBuf,

    /// Path for the compressed file (default: input path + compressed suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments specific to the decompress command
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to the compressed file
    pub input: PathBuf,

    /// Path for the decompressed file (default: compressed suffix replaced)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments specific to the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Path to the original text file
    pub input: PathBuf,
}
