//! File system errors

use std::path::Path;

use super::RedirectError;

pub fn root_not_found(path: &Path) -> RedirectError {
    RedirectError::RootNotFound {
        path: path.display().to_string(),
    }
}

pub fn walk_failed(path: &Path, reason: impl ToString) -> RedirectError {
    RedirectError::WalkFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn read_failed(path: &Path, reason: impl ToString) -> RedirectError {
    RedirectError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn write_failed(path: &Path, reason: impl ToString) -> RedirectError {
    RedirectError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a rename error carrying both ends of the move
pub fn rename_failed(from: &Path, to: &Path, reason: impl ToString) -> RedirectError {
    RedirectError::RenameFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn remove_failed(path: &Path, reason: impl ToString) -> RedirectError {
    RedirectError::RemoveFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
