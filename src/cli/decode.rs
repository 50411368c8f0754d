use std::process::ExitCode;

use anyhow::{Context, Result};
use huffpack::Config;

use crate::cli::DecodeArgs;

pub fn decode(config: &Config, args: DecodeArgs) -> Result<ExitCode> {
    let report = huffpack::decompress_with(config, &args.input, args.output.as_deref())
        .with_context(|| format!("decompressing {} failed", args.input.display()))?;

    println!("Decompression complete. File integrity verified.");
    println!("Decompressed file saved as: {}", report.output.display());
    Ok(ExitCode::SUCCESS)
}
