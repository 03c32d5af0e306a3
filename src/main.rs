//! mdredirect - redirect stamping for Markdown documentation trees
//!
//! Appends `<base-path><id>` to the `redirect_from` front matter list of every
//! Markdown document under a directory and rewrites each file in place.

use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;
mod config;
mod document;
mod error;
mod operations;
mod path_utils;
mod rewriter;
mod ui;

use cli::{Cli, Commands};
use commands::GlobalOptions;

/// Route log output to stderr. `RUST_LOG` overrides the flag-derived level.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        config: cli.config,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Stamp(args) => commands::stamp::run(&global, &args),
        Commands::Recover(args) => commands::recover::run(&global, &args),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
