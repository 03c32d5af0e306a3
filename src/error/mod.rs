//! Error types and handling for mdredirect
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`document`]: Front matter and rewrite errors

pub mod config;
pub mod document;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mdredirect operations
#[derive(Error, Diagnostic, Debug)]
pub enum RedirectError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(mdredirect::config::not_found),
        help("Pass --config with an existing file or drop the flag")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(mdredirect::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(mdredirect::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Missing setting '{name}'")]
    #[diagnostic(
        code(mdredirect::config::missing_setting),
        help("Set it with {flag}, the matching environment variable, or the config file")
    )]
    MissingSetting { name: String, flag: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(mdredirect::config::invalid_pattern),
        help("Patterns are matched against paths relative to the root, e.g. **/*.md")
    )]
    InvalidPattern { pattern: String, reason: String },

    // File system errors
    #[error("Root directory not found: {path}")]
    #[diagnostic(code(mdredirect::fs::root_not_found))]
    RootNotFound { path: String },

    #[error("Failed to enumerate files under {path}: {reason}")]
    #[diagnostic(code(mdredirect::fs::walk_failed))]
    WalkFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(mdredirect::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(mdredirect::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to rename {from} to {to}: {reason}")]
    #[diagnostic(
        code(mdredirect::fs::rename_failed),
        help("Run 'mdredirect recover' to restore any parked originals")
    )]
    RenameFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to remove file: {path}: {reason}")]
    #[diagnostic(code(mdredirect::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    // Document errors
    #[error("Invalid front matter in {path}: {reason}")]
    #[diagnostic(
        code(mdredirect::document::invalid_front_matter),
        help("Fix the YAML block or rerun with --on-invalid-front-matter skip")
    )]
    InvalidFrontMatter { path: String, reason: String },

    #[error("Failed to serialize front matter for {path}: {reason}")]
    #[diagnostic(code(mdredirect::document::serialize_failed))]
    SerializeFailed { path: String, reason: String },

    #[error("Injected fault '{point}' while rewriting {path}")]
    #[diagnostic(
        code(mdredirect::document::injected_fault),
        help("Unset MDREDIRECT_FAULT_POINT, then run 'mdredirect recover'")
    )]
    InjectedFault { point: String, path: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RedirectError>;
