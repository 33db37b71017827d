//! tarsh entry point.
//!
//! ```bash
//! cargo run -p tarsh-repl -- config.json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "tarsh")]
#[command(about = "A tiny shell over a read-only tar archive")]
#[command(version)]
struct Cli {
    /// JSON config naming the archive and the startup script
    config: PathBuf,

    /// Skip the startup script
    #[arg(long = "no-startup")]
    no_startup: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr (respects RUST_LOG); stdout is the shell's output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tarsh_repl::run(
        &cli.config,
        tarsh_repl::RunOptions {
            skip_startup: cli.no_startup,
        },
    )
}
