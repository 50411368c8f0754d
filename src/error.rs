use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while compressing or decompressing.
///
/// None of these are recovered internally. A failed operation never leaves a
/// partially written file behind.
#[derive(Debug, Error)]
pub enum Error {
    /// A Huffman tree was requested for a frequency table with no symbols.
    #[error("cannot build a Huffman tree from an empty frequency table")]
    EmptyFrequencyTable,

    /// The bit packer met a symbol that the code table does not cover.
    ///
    /// This only happens when the code table was built from different text.
    #[error("symbol {0:?} has no code in the code table")]
    MissingCode(char),

    /// The container bytes do not follow the file format.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// The payload ran out (or produced an impossible bit) in the middle of a codeword.
    #[error("decode desynchronized after {consumed} of {total} bits")]
    DecodeDesync { consumed: usize, total: usize },

    /// The decoded text does not hash to the value stored in the container.
    #[error("integrity check failed: expected {expected}, got {actual}")]
    IntegrityMismatch { expected: String, actual: String },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A decoding failure, tagged with the container it came from.
    #[error("{}: {inner}", path.display())]
    AtPath { path: PathBuf, inner: Box<Error> },
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attaches `path` to errors that do not already name one.
    pub(crate) fn at(self, path: &Path) -> Self {
        match self {
            Error::Io { .. } | Error::Config { .. } | Error::AtPath { .. } => self,
            other => Error::AtPath {
                path: path.to_path_buf(),
                inner: Box::new(other),
            },
        }
    }

    /// The innermost error, with any path wrapping removed.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::AtPath { inner, .. } => inner.root_cause(),
            other => other,
        }
    }
}
