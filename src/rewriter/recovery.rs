//! Recovery of temporary files left behind by interrupted rewrites
//!
//! A rewrite that stops part way leaves siblings of the target named
//! `<target>.staged-<suffix>` (new content) or `<target>.parked-<suffix>`
//! (original content, two-phase only). Recovery resolves them:
//!
//! - parked, target missing: the original is renamed back onto the target
//! - parked, target present: the swap completed, the parked copy is removed
//! - staged, target missing: the staged content is renamed onto the target
//! - staged, target present: the staged copy is removed
//!
//! Parked files are resolved first so an original always wins over staged
//! content for the same target.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};

/// Role tag for files holding new, not yet live content
pub const STAGED_TAG: &str = ".staged-";

/// Role tag for originals moved aside during a two-phase rewrite
pub const PARKED_TAG: &str = ".parked-";

/// Length of the lowercase hex suffix after a role tag
pub const SUFFIX_LEN: usize = 10;

fn is_suffix(s: &str) -> bool {
    s.len() == SUFFIX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanKind {
    Staged,
    Parked,
}

/// A temporary file and the target it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orphan {
    pub path: PathBuf,
    pub target: PathBuf,
    pub kind: OrphanKind,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecoveryReport {
    /// Targets whose content was put back from a temporary file
    pub restored: Vec<PathBuf>,
    /// Temporary files deleted as stale
    pub removed: Vec<PathBuf>,
}

impl RecoveryReport {
    pub fn is_empty(&self) -> bool {
        self.restored.is_empty() && self.removed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.restored.len() + self.removed.len()
    }
}

/// Classify `path` as a staged or parked temporary file, if it is one.
pub fn classify(path: &Path) -> Option<Orphan> {
    let name = path.file_name()?.to_str()?;

    [(PARKED_TAG, OrphanKind::Parked), (STAGED_TAG, OrphanKind::Staged)]
        .into_iter()
        .find_map(|(tag, kind)| {
            let idx = name.rfind(tag)?;
            let suffix = &name[idx + tag.len()..];
            let target_name = &name[..idx];
            if target_name.is_empty() || !is_suffix(suffix) {
                return None;
            }
            Some(Orphan {
                path: path.to_path_buf(),
                target: path.with_file_name(target_name),
                kind,
            })
        })
}

/// Find every staged or parked file under `root`, sorted by path.
pub fn find_orphans(root: &Path) -> Result<Vec<Orphan>> {
    let mut orphans = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| fs_error::walk_failed(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(orphan) = classify(entry.path()) {
            orphans.push(orphan);
        }
    }
    orphans.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(orphans)
}

fn restore(orphan: &Orphan, report: &mut RecoveryReport) -> Result<()> {
    warn!(
        "Restoring {} from {}",
        orphan.target.display(),
        orphan.path.display()
    );
    fs::rename(&orphan.path, &orphan.target)
        .map_err(|e| fs_error::rename_failed(&orphan.path, &orphan.target, e))?;
    report.restored.push(orphan.target.clone());
    Ok(())
}

fn discard(orphan: &Orphan, report: &mut RecoveryReport) -> Result<()> {
    info!("Removing stale {}", orphan.path.display());
    fs::remove_file(&orphan.path).map_err(|e| fs_error::remove_failed(&orphan.path, e))?;
    report.removed.push(orphan.path.clone());
    Ok(())
}

/// Resolve all temporary files under `root`.
pub fn recover(root: &Path) -> Result<RecoveryReport> {
    let orphans = find_orphans(root)?;
    let mut report = RecoveryReport::default();

    let (parked, staged): (Vec<_>, Vec<_>) = orphans
        .iter()
        .partition(|o| o.kind == OrphanKind::Parked);

    for orphan in parked.into_iter().chain(staged) {
        if orphan.target.exists() {
            discard(orphan, &mut report)?;
        } else {
            restore(orphan, &mut report)?;
        }
    }

    Ok(report)
}
