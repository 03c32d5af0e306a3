use clap::Parser;
use std::path::PathBuf;

use crate::config::DecodeErrorPolicy;
use crate::rewriter::{FaultPoint, RewriteStrategy};

/// Arguments for the stamp command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Stamp every Markdown file under a directory:\n    mdredirect stamp --root content/en --base-path /docs/en/\n\n\
                  Preview without writing:\n    mdredirect stamp --root content/en --base-path /docs/en/ --dry-run\n\n\
                  Only files under guide/:\n    mdredirect stamp --root content/en --base-path /docs/en/ --pattern 'guide/**/*.md'\n\n\
                  Skip files with broken front matter instead of stopping:\n    mdredirect stamp --config mdredirect.yaml --on-invalid-front-matter skip")]
pub struct StampArgs {
    /// Directory holding the Markdown tree
    #[arg(long, short = 'r', env = "MDREDIRECT_ROOT")]
    pub root: Option<PathBuf>,

    /// URL prefix placed before each document id (e.g. /docs/en/)
    #[arg(long, short = 'b', env = "MDREDIRECT_BASE_PATH", allow_hyphen_values = true)]
    pub base_path: Option<String>,

    /// Glob matched against paths relative to the root [default: **/*.md]
    #[arg(long, short = 'p')]
    pub pattern: Option<String>,

    /// How files are replaced on disk [default: atomic]
    #[arg(long, value_enum)]
    pub strategy: Option<RewriteStrategy>,

    /// What to do when a front matter block is not valid YAML [default: abort]
    #[arg(long, value_enum)]
    pub on_invalid_front_matter: Option<DecodeErrorPolicy>,

    /// Do not append an entry the redirect list already holds
    #[arg(long)]
    pub skip_existing: bool,

    /// Leave files without a front matter block untouched
    #[arg(long)]
    pub skip_without_front_matter: bool,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Stop every rewrite at the named step (testing aid)
    #[arg(long, value_enum, hide = true, env = "MDREDIRECT_FAULT_POINT")]
    pub fault_point: Option<FaultPoint>,
}
