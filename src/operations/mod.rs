//! Operations behind the CLI commands
//!
//! - [`discovery`]: enumerate the documents a run applies to
//! - [`stamp`]: split, augment and rewrite each document

pub mod discovery;
pub mod stamp;
