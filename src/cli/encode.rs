use std::process::ExitCode;

use anyhow::{Context, Result};
use huffpack::Config;

use crate::cli::EncodeArgs;

pub fn encode(config: &Config, args: EncodeArgs) -> Result<ExitCode> {
    let report = huffpack::compress_with(config, &args.input, args.output.as_deref())
        .with_context(|| format!("compressing {} failed", args.input.display()))?;

    println!("Compression complete. Ratio: {:.2}%", report.ratio() * 100.0);
    println!("Compressed file saved as: {}", report.output.display());
    Ok(ExitCode::SUCCESS)
}
