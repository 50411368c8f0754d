use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use huffpack::{Compressor, HuffmanCoding};

use crate::cli::TestArgs;

pub fn test(args: TestArgs) -> Result<ExitCode> {
    let path = &args.input;
    let input = fs::read_to_string(path).with_context(|| format!("couldn't read {} as UTF-8 text", path.display()))?;

    let start = Instant::now();
    let result = HuffmanCoding.test_roundtrip(&input);
    let elapsed = start.elapsed();

    let original_size = input.len();
    let (passed, compressed_size, error) = match &result {
        Ok(eq) => (eq.is_successful(), eq.get_compressed().len(), None),
        Err(e) => (false, 0, Some(e)),
    };

    let bytes_saved = original_size as isize - compressed_size as isize;
    let percent_saved = if original_size == 0 {
        0.0
    } else {
        (bytes_saved as f64) / (original_size as f64) * 100.0
    };

    let passed_string = if passed { "PASSED" } else { "FAILED" };
    eprintln!(
        "======== {} {} ========\n\t{:.0?} roundtrip\n\toriginal: {} bytes\n\tcompressed: {} bytes\n\tsaved: {:+} bytes ({:+.1}%){}",
        passed_string,
        path.display(),
        elapsed,
        original_size,
        compressed_size,
        bytes_saved,
        percent_saved,
        error.map(|e| format!("\n\terror: {}", e)).unwrap_or_default(),
    );

    Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
