//! The stamp run: recover, discover, then split, augment and rewrite each
//! document in turn.
//!
//! Documents are processed one at a time. The first fatal error stops the run;
//! documents already rewritten stay rewritten and later ones are not touched.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::config::{DecodeErrorPolicy, RunConfig};
use crate::document::{append_redirect, redirect_entry, split};
use crate::error::{Result, document as doc_error, fs as fs_error};
use crate::operations::discovery::{discover_documents, ensure_root};
use crate::path_utils;
use crate::rewriter::{self, Rewriter, recovery};
use crate::ui::ProgressReporter;

/// What happened to one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A redirect entry was appended and the file rewritten (or would be, in a dry run)
    Rewritten,
    /// The entry was already present and `skip_existing` is on
    Unchanged,
    /// Left untouched by policy
    Skipped,
}

/// Totals for a finished run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub matched: usize,
    pub rewritten: usize,
    pub unchanged: usize,
    pub skipped: usize,
    /// Temporary files resolved before processing started
    pub recovered: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Rewritten => self.rewritten += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }
}

/// Run a full stamp pass over `config.root_directory`.
pub fn run(config: &RunConfig, reporter: &mut dyn ProgressReporter) -> Result<RunSummary> {
    let root = config.root_directory.as_path();
    ensure_root(root)?;

    let recovered = if config.dry_run {
        let orphans = recovery::find_orphans(root)?;
        if !orphans.is_empty() {
            warn!(
                "{} temporary file(s) from an interrupted run; run 'mdredirect recover'",
                orphans.len()
            );
        }
        0
    } else {
        rewriter::recover(root)?.total()
    };

    let files = discover_documents(root, &config.pattern)?;
    info!("Matched {} document(s) under {}", files.len(), root.display());

    let rewriter = Rewriter::new(config.strategy).with_fault_point(config.fault_point);
    let mut summary = RunSummary {
        matched: files.len(),
        recovered,
        ..RunSummary::default()
    };

    reporter.start(u64::try_from(files.len()).unwrap_or(u64::MAX));
    for path in &files {
        match process_file(path, config, &rewriter) {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                reporter.abandon();
                return Err(e);
            }
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        reporter.update_file(&path_utils::to_forward_slashes(relative));
    }
    reporter.finish();

    Ok(summary)
}

/// Split, augment and rewrite a single document.
pub fn process_file(path: &Path, config: &RunConfig, rewriter: &Rewriter) -> Result<Outcome> {
    let contents = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, e))?;

    let mut document = match split(&contents) {
        Ok(document) => document,
        Err(e) => match config.decode_policy {
            DecodeErrorPolicy::Abort => return Err(doc_error::invalid_front_matter(path, e)),
            DecodeErrorPolicy::Skip => {
                warn!("Skipping {}: invalid front matter: {}", path.display(), e);
                return Ok(Outcome::Skipped);
            }
        },
    };

    if !document.front_matter && config.skip_without_front_matter {
        info!("Skipping {}: no front matter", path.display());
        return Ok(Outcome::Skipped);
    }

    if !append_redirect(
        &mut document.metadata,
        &config.url_base_prefix,
        config.skip_existing,
    ) {
        debug!("{} already redirects from its id", path.display());
        return Ok(Outcome::Unchanged);
    }

    let entry = redirect_entry(&config.url_base_prefix, &document.metadata.id);
    if config.dry_run {
        info!("Would add {} to {}", entry, path.display());
        return Ok(Outcome::Rewritten);
    }

    rewriter.rewrite(path, &document)?;
    debug!("Added {} to {}", entry, path.display());
    Ok(Outcome::Rewritten)
}
