//! Recover command implementation

use console::style;

use crate::cli::RecoverArgs;
use crate::commands::GlobalOptions;
use crate::config::resolve_root;
use crate::error::Result;
use crate::operations::discovery::ensure_root;
use crate::rewriter;

/// Run recover command
pub fn run(global: &GlobalOptions, args: &RecoverArgs) -> Result<()> {
    let file = global.load_config()?;
    let root = resolve_root(args.root.as_deref(), file.as_ref())?;
    ensure_root(&root)?;

    let report = rewriter::recover(&root)?;
    if global.quiet {
        return Ok(());
    }

    if report.is_empty() {
        println!("No temporary files found under {}.", root.display());
        return Ok(());
    }
    for path in &report.restored {
        println!("{} {}", style("Restored").yellow().bold(), path.display());
    }
    for path in &report.removed {
        println!("{} {}", style("Removed").dim(), path.display());
    }
    Ok(())
}
