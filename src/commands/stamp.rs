//! Stamp command implementation

use console::style;

use crate::cli::StampArgs;
use crate::commands::GlobalOptions;
use crate::config::RunConfig;
use crate::error::Result;
use crate::operations::stamp::{self, RunSummary};

/// Run stamp command
pub fn run(global: &GlobalOptions, args: &StampArgs) -> Result<()> {
    let file = global.load_config()?;
    let config = RunConfig::from_sources(args, file.as_ref())?;

    let mut reporter = global.reporter();
    let summary = stamp::run(&config, reporter.as_mut())?;

    if !global.quiet {
        println!("{}", format_summary(&config, &summary));
    }
    Ok(())
}

fn format_summary(config: &RunConfig, summary: &RunSummary) -> String {
    let verb = if config.dry_run {
        "Would stamp"
    } else {
        "Stamped"
    };
    let mut line = format!(
        "{} {} of {} document(s) under {}",
        style(verb).green().bold(),
        summary.rewritten,
        summary.matched,
        config.root_directory.display()
    );

    let mut details = Vec::new();
    if summary.unchanged > 0 {
        details.push(format!("{} unchanged", summary.unchanged));
    }
    if summary.skipped > 0 {
        details.push(format!("{} skipped", summary.skipped));
    }
    if summary.recovered > 0 {
        details.push(format!("{} temporary file(s) recovered", summary.recovered));
    }
    if !details.is_empty() {
        line.push_str(&format!(" ({})", details.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary_lists_details() {
        console::set_colors_enabled(false);
        let config = RunConfig::new("docs", "/en/");
        let summary = RunSummary {
            matched: 5,
            rewritten: 3,
            unchanged: 1,
            skipped: 1,
            recovered: 0,
        };
        assert_eq!(
            format_summary(&config, &summary),
            "Stamped 3 of 5 document(s) under docs (1 unchanged, 1 skipped)"
        );
    }

    #[test]
    fn test_format_summary_dry_run() {
        console::set_colors_enabled(false);
        let mut config = RunConfig::new("docs", "/en/");
        config.dry_run = true;
        let summary = RunSummary {
            matched: 2,
            rewritten: 2,
            ..RunSummary::default()
        };
        assert_eq!(
            format_summary(&config, &summary),
            "Would stamp 2 of 2 document(s) under docs"
        );
    }
}
