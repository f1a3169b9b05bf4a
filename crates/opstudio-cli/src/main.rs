#![forbid(unsafe_code)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod input;

/// Log filter variable, e.g. `OPSTUDIO_LOG=opstudio_core=debug`.
const LOG_ENV: &str = "OPSTUDIO_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };
    if let Err(err) = cli::run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
