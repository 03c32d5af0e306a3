//! Progress presentation layer
//!
//! All per-file progress goes through the [`ProgressReporter`] trait so the
//! stamp driver does not care whether a bar is drawn. `--quiet` and
//! `--verbose` select the silent reporter; log lines and a redrawn bar do not
//! mix well.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for a batch of documents
pub trait ProgressReporter {
    /// Begin a batch of `total_files` documents
    fn start(&mut self, total_files: u64);

    /// A document has been processed
    fn update_file(&mut self, file_path: &str);

    /// The batch completed
    fn finish(&mut self);

    /// The batch stopped on an error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a visual progress bar
#[derive(Default)]
pub struct InteractiveProgressReporter {
    file_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total_files: u64) {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);
        self.file_pb = Some(file_pb);
    }

    fn update_file(&mut self, file_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.set_message(truncate_path(file_path, 50));
            file_pb.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.abandon();
        }
    }
}

/// Silent progress reporter for quiet and verbose modes
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total_files: u64) {}

    fn update_file(&mut self, _file_path: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Keep the tail of long paths, which carries the file name.
fn truncate_path(path: &str, max: usize) -> String {
    let count = path.chars().count();
    if count <= max {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - (max - 3)).collect();
    format!("...{tail}")
}
