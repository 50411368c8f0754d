use crate::error::Result;

/// Shared behavior for text compressors.
///
/// Provides [`compress_text`](Compressor::compress_text) to compress text and
/// [`decompress_text`](Compressor::decompress_text) to get it back.
///
/// # Note
///
/// No guarantees are made about the length of the output of
/// [`compress_text`](Compressor::compress_text). It can be shorter, equal in length, or longer.
/// The only guarantee is that [`decompress_text`](Compressor::decompress_text) will
/// reconstruct the original text, or fail.
pub trait Compressor {
    /// Compresses `text` into a self-describing byte container.
    fn compress_text(&self, text: &str) -> Result<Vec<u8>>;

    /// Decompresses a container produced by [`compress_text`](Compressor::compress_text).
    ///
    /// # Errors
    ///
    /// Returns an error if the container is malformed, the payload cannot be
    /// decoded, or the decoded text fails its integrity check.
    fn decompress_text(&self, data: &[u8]) -> Result<String>;

    /// Human readable name, for reports.
    fn compressor_name(&self) -> String {
        core::any::type_name::<Self>().to_string()
    }

    /// Performs a round-trip test on the compressor.
    ///
    /// Use for sanity checking the compressor and decompressor.
    fn test_roundtrip<'orig>(&self, text: &'orig str) -> Result<RoundTripTestResult<'orig>> {
        let compressed = self.compress_text(text)?;
        let decompressed = self.decompress_text(&compressed)?;
        let equal = text == decompressed;

        Ok(RoundTripTestResult {
            equal,
            original: text,
            compressed,
            decompressed,
        })
    }
}

/// Represents the result of a round-trip test.
///
/// Use accessor methods to retrieve the [`result`][RoundTripTestResult::is_successful],
/// the [`original text`][RoundTripTestResult::get_original],
/// the [`compressed data`][RoundTripTestResult::get_compressed],
/// and the [`decompressed text`][RoundTripTestResult::get_decompressed].
#[derive(Clone, Debug, Hash)]
pub struct RoundTripTestResult<'orig> {
    pub(crate) equal: bool,
    pub(crate) original: &'orig str,
    pub(crate) compressed: Vec<u8>,
    pub(crate) decompressed: String,
}

impl<'orig> RoundTripTestResult<'orig> {
    /// Whether the original and decompressed text were equal.
    pub const fn is_successful(&self) -> bool {
        self.equal
    }

    /// The original text before any action was taken.
    pub const fn get_original(&self) -> &'orig str {
        self.original
    }

    /// The data after it has been encoded by the compressor.
    pub fn get_compressed(&self) -> &[u8] {
        self.compressed.as_slice()
    }

    /// The text after it has been decoded by the decompressor.
    pub fn get_decompressed(&self) -> &str {
        self.decompressed.as_str()
    }

    /// Compressed size over original size, both in bytes. Zero for empty input.
    pub fn size_ratio(&self) -> f64 {
        compression_ratio(self.original.as_bytes(), &self.compressed)
    }
}

/// `compressed.len() / original.len()`, or `0.0` when there is no original data.
pub fn compression_ratio(original: &[u8], compressed: &[u8]) -> f64 {
    if original.is_empty() {
        return 0.0;
    }
    compressed.len() as f64 / original.len() as f64
}
