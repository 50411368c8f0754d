//! Compressing and decompressing files on disk.
//!
//! Output is written to a temporary file next to the destination and renamed
//! into place once complete, so a failed call leaves nothing at the final path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::Config;
use crate::container::Container;
use crate::error::{Error, Result};
use crate::huffman;

/// Outcome of [`compress_with`].
#[derive(Clone, Debug, PartialEq)]
pub struct CompressionReport {
    pub output: PathBuf,
    /// Size of the input text in bytes.
    pub original_len: usize,
    /// Size of the whole container in bytes, headers included.
    pub compressed_len: usize,
}

impl CompressionReport {
    /// Fraction of the input saved: `1 - compressed / original`, `0.0` for empty input.
    ///
    /// Negative when the container is larger than the text.
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 0.0;
        }
        1.0 - self.compressed_len as f64 / self.original_len as f64
    }
}

/// Outcome of [`decompress_with`]. Only produced after the integrity check passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecompressionReport {
    pub output: PathBuf,
    pub compressed_len: usize,
    pub decompressed_len: usize,
}

/// Compresses `input` with the default [`Config`], returning the path written.
pub fn compress(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    compress_with(&Config::default(), input, output).map(|report| report.output)
}

/// Decompresses `input` with the default [`Config`], returning the path written.
pub fn decompress(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    decompress_with(&Config::default(), input, output).map(|report| report.output)
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(input = %input.display())))]
pub fn compress_with(config: &Config, input: &Path, output: Option<&Path>) -> Result<CompressionReport> {
    let text = fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
    let output = output.map_or_else(|| config.compressed_path(input), Path::to_path_buf);

    let container = huffman::encode_text(&text).map_err(|e| e.at(input))?;
    let bytes = container.to_bytes();
    write_atomic(&output, &bytes)?;

    let report = CompressionReport {
        output,
        original_len: text.len(),
        compressed_len: bytes.len(),
    };

    crate::if_tracing! {
        tracing::info!(
            output = %report.output.display(),
            original_len = report.original_len,
            compressed_len = report.compressed_len,
            ratio = report.ratio(),
            "compression complete"
        );
    }

    Ok(report)
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(input = %input.display())))]
pub fn decompress_with(config: &Config, input: &Path, output: Option<&Path>) -> Result<DecompressionReport> {
    let data = fs::read(input).map_err(|e| Error::io(input, e))?;
    let output = output.map_or_else(|| config.decompressed_path(input), Path::to_path_buf);

    let text = Container::from_bytes(&data)
        .and_then(|container| huffman::decode_container(&container))
        .map_err(|e| e.at(input))?;
    write_atomic(&output, text.as_bytes())?;

    let report = DecompressionReport {
        output,
        compressed_len: data.len(),
        decompressed_len: text.len(),
    };

    crate::if_tracing! {
        tracing::info!(
            output = %report.output.display(),
            compressed_len = report.compressed_len,
            decompressed_len = report.decompressed_len,
            "decompression complete, integrity verified"
        );
    }

    Ok(report)
}

/// Replaces `path` with `contents` in one rename.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::io(path, e))?;
    file.write_all(contents).map_err(|e| Error::io(path, e))?;
    file.as_file().sync_all().map_err(|e| Error::io(path, e))?;
    file.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_empty_input_is_zero() {
        let report = CompressionReport {
            output: PathBuf::from("x"),
            original_len: 0,
            compressed_len: 67,
        };
        assert_eq!(report.ratio(), 0.0);
    }

    #[test]
    fn ratio_is_fraction_saved() {
        let report = CompressionReport {
            output: PathBuf::from("x"),
            original_len: 200,
            compressed_len: 50,
        };
        assert!((report.ratio() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn write_atomic_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        fs::write(&path, b"old contents that are longer").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_atomic_into_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.bin");
        assert!(matches!(write_atomic(&path, b"data"), Err(Error::Io { .. })));
        assert!(!path.exists());
    }
}
