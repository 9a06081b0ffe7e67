//! Path validation helpers.
//!
//! Paths are compared as literal strings. No normalization happens here:
//! `/about` and `/about/` are different routes.

use crate::error::{Result, RouteError};

/// Check that a route path is absolute.
pub fn validate_route_path(path: &str) -> Result<()> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(RouteError::InvalidPath {
            path: path.to_string(),
        })
    }
}

/// Check that a navigation target is non-empty.
///
/// Navigation targets do not have to be registered, or even absolute.
pub fn validate_target(path: &str) -> Result<()> {
    if path.is_empty() {
        Err(RouteError::EmptyPath)
    } else {
        Ok(())
    }
}
