//! Error types for route registration, resolution, and navigation.

use thiserror::Error;

/// Errors produced by the route table and the router.
///
/// - [`RouteError::NotFound`] is recoverable: the view layer renders a fallback.
/// - [`RouteError::DuplicateRoute`] and [`RouteError::InvalidPath`] are
///   configuration bugs and should stop the application at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route is registered for the requested path.
    #[error("no route registered for '{path}'")]
    NotFound { path: String },

    /// A route with this path is already registered.
    #[error("route '{path}' is already registered")]
    DuplicateRoute { path: String },

    /// Route paths must be non-empty and start with '/'.
    #[error("route path '{path}' must be absolute (start with '/')")]
    InvalidPath { path: String },

    /// Navigation target was an empty string.
    #[error("cannot navigate to an empty path")]
    EmptyPath,
}

pub type Result<T> = std::result::Result<T, RouteError>;
