use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};

mod cli;

fn main() -> ExitCode {
    huffpack::if_tracing! {
        use tracing_subscriber::{EnvFilter, fmt};

        let subscriber = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    let cli = Cli::parse();
    let result = cli.config().and_then(|config| match cli.command {
        Command::Compress(args) => cli::encode::encode(&config, args),
        Command::Decompress(args) => cli::decode::decode(&config, args),
        Command::Test(args) => cli::test::test(args),
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            huffpack::if_tracing! {
                tracing::error!(error = %e, "command failed");
            }
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
