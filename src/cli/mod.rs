//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - stamp: Stamp command arguments
//! - recover: Recover command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod recover;
pub mod stamp;

pub use completions::CompletionsArgs;
pub use recover::RecoverArgs;
pub use stamp::StampArgs;

/// mdredirect - stamp redirect URLs into Markdown front matter
#[derive(Parser, Debug)]
#[command(
    name = "mdredirect",
    author,
    version,
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        "\nminimum rust ",
        env!("CARGO_PKG_RUST_VERSION")
    ),
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Stamp redirect URLs into the front matter of a Markdown documentation tree",
    long_about = "mdredirect appends <base-path><id> to the redirect_from list of every \
                  Markdown document under a directory, rewriting each file in place \
                  without risking its content if the run is interrupted.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mdredirect stamp --root content/en --base-path /docs/en/   \x1b[90m# Stamp every document\x1b[0m\n   \
                  mdredirect stamp --config mdredirect.yaml --dry-run      \x1b[90m# Preview using a config file\x1b[0m\n   \
                  mdredirect recover --root content/en                     \x1b[90m# Restore files from an interrupted run\x1b[0m\n"
)]
pub struct Cli {
    /// YAML config file with rootDirectory, urlBasePrefix and run options
    #[arg(long, short = 'c', global = true, env = "MDREDIRECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a redirect entry to every matched document
    Stamp(StampArgs),

    /// Restore or remove temporary files left by an interrupted run
    Recover(RecoverArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
