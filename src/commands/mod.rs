//! Command implementations for mdredirect CLI

pub mod completions;
pub mod recover;
pub mod stamp;

use std::path::PathBuf;

use crate::config::ConfigFile;
use crate::error::Result;
use crate::ui::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
}

impl GlobalOptions {
    /// Load the config file named by `--config`, if any.
    pub fn load_config(&self) -> Result<Option<ConfigFile>> {
        self.config.as_deref().map(ConfigFile::load).transpose()
    }

    /// A progress bar unless output is quiet or verbose logging is on.
    pub fn reporter(&self) -> Box<dyn ProgressReporter> {
        if self.quiet || self.verbose {
            Box::new(SilentProgressReporter)
        } else {
            Box::new(InteractiveProgressReporter::new())
        }
    }
}
