//! protoc-gen-mice
//!
//! Usage:
//!   protoc --mice_out=. api/*.proto
//!   protoc --mice_out=file_prefix=api/,style=split:. api/*.proto
//!
//! Diagnostics go to stderr; stdout carries only the response envelope.

use anyhow::Context;
use clap::Parser;
use protoc_gen_mice::{Cli, read_input, run};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let input = read_input(cli.input.as_deref()).context("failed to read input")?;
    let output = run(&input, &cli.overrides()).context("failed to run")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output).context("failed to write response")?;
    stdout.flush().context("failed to write response")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MICE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
