//! Document discovery under a root directory
//!
//! Files are enumerated recursively and matched against a shell-style glob
//! (`**/*.md` by default) applied to the path relative to the root. Leftover
//! staged or parked files from an interrupted rewrite are never returned.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, config, fs as fs_error};
use crate::path_utils;
use crate::rewriter::recovery;

/// Fail unless `root` is an existing directory.
pub fn ensure_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(fs_error::root_not_found(root))
    }
}

/// All files under `root` whose relative path matches `pattern`, sorted.
pub fn discover_documents(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    ensure_root(root)?;
    let glob = Glob::new(pattern).map_err(|e| config::invalid_pattern(pattern, e.to_string()))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| fs_error::walk_failed(root, e))?;
        if !entry.file_type().is_file() || recovery::classify(entry.path()).is_some() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let normalized = path_utils::to_forward_slashes(relative);
        if glob.matched(&CandidatePath::from(normalized.as_str())).is_some() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
