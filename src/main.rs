//! rowtrace - look up a row by id and report failures with layered context.

use std::process::ExitCode;

use clap::Parser;
use rowtrace::cli::Cli;
use rowtrace::errors::{self, ErrorKind, Wrapped};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Controlled by RUST_LOG; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Terse one-liner for expected absences, full trace for everything else.
fn report(err: &Wrapped) {
    let kind = ErrorKind::of(err);
    debug!(kind = %kind, "command failed");
    if kind.is_expected() {
        eprintln!("{err:#}");
    } else {
        eprintln!("{}", errors::render(err));
    }
}
