use clap::Parser;
use std::path::PathBuf;

/// Arguments for the recover command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Clean up after an interrupted run:\n    mdredirect recover --root content/en\n\n\
                  Use the root from a config file:\n    mdredirect recover --config mdredirect.yaml")]
pub struct RecoverArgs {
    /// Directory holding the Markdown tree
    #[arg(long, short = 'r', env = "MDREDIRECT_ROOT")]
    pub root: Option<PathBuf>,
}
