//! cte - Config to ENV converter
//!
//! Main entry point for the cte command-line tool.

use clap::Parser;
use cte_cli::Args;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    cte_cli::run(&args)
}
