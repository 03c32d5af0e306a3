//! Front matter and rewrite errors

use std::path::Path;

use super::RedirectError;

pub fn invalid_front_matter(path: &Path, reason: impl ToString) -> RedirectError {
    RedirectError::InvalidFrontMatter {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn serialize_failed(path: &Path, reason: impl ToString) -> RedirectError {
    RedirectError::SerializeFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates the error returned when an armed fault point is reached
pub fn injected_fault(point: impl ToString, path: &Path) -> RedirectError {
    RedirectError::InjectedFault {
        point: point.to_string(),
        path: path.display().to_string(),
    }
}
