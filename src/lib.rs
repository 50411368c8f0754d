//! Huffman compression for text files.
//!
//! A compressed file is a self-describing container: the SHA-256 of the
//! original text, the symbol frequency table, and the packed Huffman payload.
//! The Huffman tree itself is never stored; both directions rebuild it from the
//! frequency table with the same deterministic tie-break.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let compressed = huffpack::compress(Path::new("notes.txt"), None)?;
//! let restored = huffpack::decompress(&compressed, None)?;
//! # Ok::<(), huffpack::Error>(())
//! ```
//!
//! The in-memory pipeline is available through [`huffman::encode_text`] and
//! [`huffman::decode_container`], or through the [`Compressor`] trait on
//! [`HuffmanCoding`].

/// Runs the enclosed statements only when the `tracing` feature is enabled.
#[macro_export]
macro_rules! if_tracing {
    {$($body:tt)*} => {
        #[cfg(feature = "tracing")]
        {
            $($body)*
        }
    };
}

pub mod compressor;
pub mod config;
pub mod container;
pub mod error;
pub mod files;
pub mod huffman;
pub mod integrity;


pub use compressor::{Compressor, RoundTripTestResult};
pub use config::Config;
pub use container::Container;
pub use error::{Error, Result};
pub use files::{CompressionReport, DecompressionReport, compress, compress_with, decompress, decompress_with};
pub use huffman::HuffmanCoding;
