//! Crash-safe in-place rewriting of documents
//!
//! Two strategies are available:
//! - [`RewriteStrategy::Atomic`]: stage the new content in a sibling temporary
//!   file and rename it over the target in one step. The target path always
//!   holds either the old or the new content.
//! - [`RewriteStrategy::TwoPhase`]: stage, park the original under a second
//!   temporary name, move the staged file into place, then delete the parked
//!   original. An interruption between the two renames leaves the target
//!   missing and the original under its parked name; [`recovery`] restores it.
//!
//! Temporary names append a role tag and a random suffix to the target path
//! (`intro.md.staged-3fa9c01b2e`, `intro.md.parked-9e02d1c4aa`).

pub mod fault;
pub mod recovery;

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::debug;
use rand::RngCore;
use serde::Deserialize;
use tempfile::{NamedTempFile, TempPath};

use crate::document::Document;
use crate::error::{Result, document as doc_error, fs as fs_error};

pub use fault::FaultPoint;
pub use recovery::{PARKED_TAG, STAGED_TAG, SUFFIX_LEN, recover};

/// Random bytes per temporary-name suffix (two hex digits each)
const SUFFIX_BYTES: usize = SUFFIX_LEN / 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RewriteStrategy {
    /// Stage in a temporary file and rename it over the target
    #[default]
    Atomic,
    /// Stage, park the original, swap, then delete the parked original
    TwoPhase,
}

/// Writes rendered documents back over their source files
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    strategy: RewriteStrategy,
    fault_point: Option<FaultPoint>,
}

impl Rewriter {
    pub fn new(strategy: RewriteStrategy) -> Self {
        Self {
            strategy,
            fault_point: None,
        }
    }

    /// Arm a fault point; reaching it aborts the rewrite with an error.
    pub fn with_fault_point(mut self, fault_point: Option<FaultPoint>) -> Self {
        self.fault_point = fault_point;
        self
    }

    /// Replace the contents of `target` with the rendered `document`.
    pub fn rewrite(&self, target: &Path, document: &Document) -> Result<()> {
        let contents = document
            .render()
            .map_err(|e| doc_error::serialize_failed(target, e))?;

        match self.strategy {
            RewriteStrategy::Atomic => self.replace_atomic(target, &contents),
            RewriteStrategy::TwoPhase => self.replace_two_phase(target, &contents),
        }
    }

    fn check_fault(&self, point: FaultPoint, target: &Path) -> Result<()> {
        if self.fault_point == Some(point) {
            debug!("Fault point {} reached for {}", point, target.display());
            return Err(doc_error::injected_fault(point, target));
        }
        Ok(())
    }

    fn replace_atomic(&self, target: &Path, contents: &str) -> Result<()> {
        let permissions = target_permissions(target)?;
        let suffix = hex_suffix(&mut rand::thread_rng());
        let staged_path = tagged_name(target, STAGED_TAG, &suffix);
        let file = create_staged(&staged_path)?;
        // Dropping the handle before `persist` removes the staged file.
        let mut staged = NamedTempFile::from_parts(file, TempPath::from_path(&staged_path));

        staged
            .write_all(contents.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| fs_error::write_failed(&staged_path, e))?;
        set_permissions(&staged_path, permissions)?;
        self.check_fault(FaultPoint::AfterStage, target)?;

        debug!("Renaming {} onto {}", staged_path.display(), target.display());
        staged
            .persist(target)
            .map_err(|e| fs_error::rename_failed(e.file.path(), target, e.error))?;
        Ok(())
    }

    fn replace_two_phase(&self, target: &Path, contents: &str) -> Result<()> {
        let permissions = target_permissions(target)?;
        let (staged, parked) = temp_names(target);

        write_staged(&staged, contents)?;
        set_permissions(&staged, permissions)?;
        self.check_fault(FaultPoint::AfterStage, target)?;

        debug!("Parking {} as {}", target.display(), parked.display());
        fs::rename(target, &parked).map_err(|e| fs_error::rename_failed(target, &parked, e))?;
        self.check_fault(FaultPoint::AfterPark, target)?;

        fs::rename(&staged, target).map_err(|e| fs_error::rename_failed(&staged, target, e))?;
        self.check_fault(FaultPoint::AfterSwap, target)?;

        fs::remove_file(&parked).map_err(|e| fs_error::remove_failed(&parked, e))?;
        Ok(())
    }
}

/// Create a staged file. An existing file at that name is an error, never truncated.
fn create_staged(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| fs_error::write_failed(path, e))
}

fn write_staged(path: &Path, contents: &str) -> Result<()> {
    let mut file = create_staged(path)?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| fs_error::write_failed(path, e))
}

/// Permission bits of the file being replaced; staged files take them over.
fn target_permissions(target: &Path) -> Result<Permissions> {
    fs::metadata(target)
        .map(|m| m.permissions())
        .map_err(|e| fs_error::read_failed(target, e))
}

fn set_permissions(path: &Path, permissions: Permissions) -> Result<()> {
    fs::set_permissions(path, permissions).map_err(|e| fs_error::write_failed(path, e))
}

fn hex_suffix(rng: &mut impl RngCore) -> String {
    let mut bytes = [0u8; SUFFIX_BYTES];
    rng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn tagged_name(target: &Path, tag: &str, suffix: &str) -> PathBuf {
    let mut name: OsString = target.as_os_str().to_owned();
    name.push(tag);
    name.push(suffix);
    PathBuf::from(name)
}

/// Two distinct temporary paths next to `target`: (staged, parked).
pub fn temp_names(target: &Path) -> (PathBuf, PathBuf) {
    let mut rng = rand::thread_rng();
    let staged_suffix = hex_suffix(&mut rng);
    let mut parked_suffix = hex_suffix(&mut rng);
    while parked_suffix == staged_suffix {
        parked_suffix = hex_suffix(&mut rng);
    }
    (
        tagged_name(target, STAGED_TAG, &staged_suffix),
        tagged_name(target, PARKED_TAG, &parked_suffix),
    )
}
