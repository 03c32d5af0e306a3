//! Fault injection for the rewrite sequence
//!
//! A fault point names a step boundary inside [`super::Rewriter`]. When the
//! rewriter is armed with a point, reaching it returns
//! [`crate::error::RedirectError::InjectedFault`] instead of continuing, which
//! leaves the file system exactly as an interruption at that step would.
//!
//! Armed from the hidden `--fault-point` flag or `MDREDIRECT_FAULT_POINT`:
//!
//! ```bash
//! MDREDIRECT_FAULT_POINT=after-park mdredirect stamp --strategy two-phase ...
//! ```

use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FaultPoint {
    /// New content fully written to the staged file
    AfterStage,
    /// Original moved aside to the parked name (two-phase only)
    AfterPark,
    /// Staged file renamed onto the target (two-phase only)
    AfterSwap,
}

impl FaultPoint {
    pub fn as_str(self) -> &'static str {
        match self {
            FaultPoint::AfterStage => "after-stage",
            FaultPoint::AfterPark => "after-park",
            FaultPoint::AfterSwap => "after-swap",
        }
    }
}

impl fmt::Display for FaultPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
