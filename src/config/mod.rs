//! Run configuration
//!
//! A run needs a root directory and a URL base prefix. Both, plus the
//! optional knobs, come from command-line flags (or their environment
//! variables) layered over an optional YAML config file:
//!
//! ```yaml
//! rootDirectory: content/4.0.0/en
//! urlBasePrefix: /devtools-html/4.0.0/en/
//! pattern: "**/*.md"
//! strategy: two-phase
//! onInvalidFrontMatter: skip
//! skipExisting: true
//! ```
//!
//! Flags win over the file. A relative `rootDirectory` in the file is taken
//! relative to the file's own directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use crate::cli::StampArgs;
use crate::error::{Result, config};
use crate::rewriter::{FaultPoint, RewriteStrategy};

/// Glob used when neither the flags nor the file name one
pub const DEFAULT_PATTERN: &str = "**/*.md";

/// What to do with a document whose front matter cannot be decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodeErrorPolicy {
    /// Stop the whole run
    #[default]
    Abort,
    /// Leave the file untouched and continue
    Skip,
}

/// Contents of a YAML config file
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub root_directory: Option<PathBuf>,
    pub url_base_prefix: Option<String>,
    pub pattern: Option<String>,
    pub strategy: Option<RewriteStrategy>,
    pub on_invalid_front_matter: Option<DecodeErrorPolicy>,
    pub skip_existing: Option<bool>,
    pub skip_without_front_matter: Option<bool>,
}

impl ConfigFile {
    /// Load a config file, resolving a relative root against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        let mut file: ConfigFile = serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;

        if let (Some(root), Some(base)) = (&file.root_directory, path.parent()) {
            if root.is_relative() {
                file.root_directory = Some(base.join(root));
            }
        }
        Ok(file)
    }
}

/// Settings for one stamp run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub root_directory: PathBuf,
    pub url_base_prefix: String,
    pub pattern: String,
    pub strategy: RewriteStrategy,
    pub decode_policy: DecodeErrorPolicy,
    pub skip_existing: bool,
    pub skip_without_front_matter: bool,
    pub dry_run: bool,
    pub fault_point: Option<FaultPoint>,
}

impl RunConfig {
    /// A config with defaults for everything but the two required settings.
    pub fn new(root_directory: impl Into<PathBuf>, url_base_prefix: impl Into<String>) -> Self {
        Self {
            root_directory: root_directory.into(),
            url_base_prefix: url_base_prefix.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            strategy: RewriteStrategy::default(),
            decode_policy: DecodeErrorPolicy::default(),
            skip_existing: false,
            skip_without_front_matter: false,
            dry_run: false,
            fault_point: None,
        }
    }

    /// Layer stamp flags over an optional config file.
    pub fn from_sources(args: &StampArgs, file: Option<&ConfigFile>) -> Result<Self> {
        let file = file.cloned().unwrap_or_default();

        let root_directory = resolve_root(args.root.as_deref(), Some(&file))?;
        let url_base_prefix = args
            .base_path
            .clone()
            .or(file.url_base_prefix)
            .ok_or_else(|| config::missing_setting("urlBasePrefix", "--base-path"))?;

        Ok(Self {
            root_directory,
            url_base_prefix,
            pattern: args
                .pattern
                .clone()
                .or(file.pattern)
                .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
            strategy: args.strategy.or(file.strategy).unwrap_or_default(),
            decode_policy: args
                .on_invalid_front_matter
                .or(file.on_invalid_front_matter)
                .unwrap_or_default(),
            skip_existing: args.skip_existing || file.skip_existing.unwrap_or(false),
            skip_without_front_matter: args.skip_without_front_matter
                || file.skip_without_front_matter.unwrap_or(false),
            dry_run: args.dry_run,
            fault_point: args.fault_point,
        })
    }
}

/// Pick the root directory from a flag or the config file.
pub fn resolve_root(flag: Option<&Path>, file: Option<&ConfigFile>) -> Result<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| file.and_then(|f| f.root_directory.clone()))
        .ok_or_else(|| config::missing_setting("rootDirectory", "--root"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::RedirectError;
    use tempfile::TempDir;

    fn stamp_args(root: Option<&str>, base_path: Option<&str>) -> StampArgs {
        StampArgs {
            root: root.map(PathBuf::from),
            base_path: base_path.map(String::from),
            ..StampArgs::default()
        }
    }

    #[test]
    fn flags_alone_are_enough() {
        let cfg = RunConfig::from_sources(&stamp_args(Some("docs"), Some("/en/")), None).unwrap();
        assert_eq!(cfg, RunConfig::new("docs", "/en/"));
    }

    #[test]
    fn missing_base_path_is_reported() {
        let err = RunConfig::from_sources(&stamp_args(Some("docs"), None), None).unwrap_err();
        match err {
            RedirectError::MissingSetting { name, flag } => {
                assert_eq!(name, "urlBasePrefix");
                assert_eq!(flag, "--base-path");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_root_is_reported() {
        let err = RunConfig::from_sources(&stamp_args(None, Some("/en/")), None).unwrap_err();
        assert!(matches!(err, RedirectError::MissingSetting { .. }));
    }

    #[test]
    fn flags_override_file_values() {
        let file = ConfigFile {
            root_directory: Some(PathBuf::from("/from/file")),
            url_base_prefix: Some("/file/".to_string()),
            strategy: Some(RewriteStrategy::TwoPhase),
            skip_existing: Some(true),
            ..ConfigFile::default()
        };
        let mut args = stamp_args(None, Some("/flag/"));
        args.strategy = Some(RewriteStrategy::Atomic);

        let cfg = RunConfig::from_sources(&args, Some(&file)).unwrap();
        assert_eq!(cfg.root_directory, PathBuf::from("/from/file"));
        assert_eq!(cfg.url_base_prefix, "/flag/");
        assert_eq!(cfg.strategy, RewriteStrategy::Atomic);
        assert!(cfg.skip_existing);
        assert_eq!(cfg.pattern, DEFAULT_PATTERN);
    }

    #[test]
    fn load_parses_camel_case_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mdredirect.yaml");
        fs::write(
            &path,
            "rootDirectory: content/en\nurlBasePrefix: /docs/en/\nstrategy: two-phase\nonInvalidFrontMatter: skip\n",
        )
        .unwrap();

        let file = ConfigFile::load(&path).unwrap();
        assert_eq!(file.root_directory, Some(temp.path().join("content/en")));
        assert_eq!(file.url_base_prefix.as_deref(), Some("/docs/en/"));
        assert_eq!(file.strategy, Some(RewriteStrategy::TwoPhase));
        assert_eq!(file.on_invalid_front_matter, Some(DecodeErrorPolicy::Skip));
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mdredirect.yaml");
        fs::write(&path, "basePath: /docs/\n").unwrap();
        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, RedirectError::ConfigParseFailed { .. }));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::load(&temp.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, RedirectError::ConfigNotFound { .. }));
    }
}
