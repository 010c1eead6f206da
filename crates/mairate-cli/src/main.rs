mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mairate_cli=info,mairate_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::Calculate {
            scores,
            current_catalog,
            legacy_catalog,
            current_top,
            legacy_top,
            format,
            output,
        } => commands::calculate::run(
            &scores,
            &current_catalog,
            &legacy_catalog,
            current_top,
            legacy_top,
            format,
            output.as_deref(),
        ),
        Command::Rate { constant, score } => commands::rate::run(constant, score),
        Command::Check {
            current_catalog,
            legacy_catalog,
        } => commands::check::run(&current_catalog, &legacy_catalog),
    }
}
