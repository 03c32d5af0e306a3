//! Configuration errors

use super::RedirectError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> RedirectError {
    RedirectError::ConfigNotFound { path: path.into() }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> RedirectError {
    RedirectError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RedirectError {
    RedirectError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing setting error naming the flag that supplies it
pub fn missing_setting(name: impl Into<String>, flag: impl Into<String>) -> RedirectError {
    RedirectError::MissingSetting {
        name: name.into(),
        flag: flag.into(),
    }
}

pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> RedirectError {
    RedirectError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
