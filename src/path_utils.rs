//! Cross-platform path utilities

use std::path::Path;

/// Render a path with forward slashes so glob patterns match the same way on
/// every platform.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
