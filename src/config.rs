use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Output naming used when the caller gives no explicit destination.
///
/// Loaded from JSON; missing fields take their defaults.
///
/// ```json
/// { "compressed_suffix": ".huff", "decompressed_suffix": ".txt" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Appended to the input path when compressing.
    pub compressed_suffix: String,

    /// Replaces the compressed suffix when decompressing.
    pub decompressed_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compressed_suffix: ".huffman".to_string(),
            decompressed_suffix: ".decompressed".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_slice(&data).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `input` with the compressed suffix appended.
    pub fn compressed_path(&self, input: &Path) -> PathBuf {
        let mut name = OsString::from(input.as_os_str());
        name.push(&self.compressed_suffix);
        PathBuf::from(name)
    }

    /// `input` with its compressed suffix swapped for the decompressed one.
    ///
    /// Without a compressed suffix the decompressed suffix is appended instead,
    /// so the result never names the input itself.
    pub fn decompressed_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .to_str()
            .filter(|_| !self.compressed_suffix.is_empty())
            .and_then(|s| s.strip_suffix(self.compressed_suffix.as_str()));

        let mut name = match stem {
            Some(stem) => OsString::from(stem),
            None => input.as_os_str().to_owned(),
        };
        name.push(&self.decompressed_suffix);
        let path = PathBuf::from(name);
        if path == input {
            let mut name = OsString::from(input.as_os_str());
            name.push(".decompressed");
            return PathBuf::from(name);
        }
        path
    }
}
