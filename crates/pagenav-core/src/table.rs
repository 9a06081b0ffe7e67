//! Static mapping from literal paths to view identifiers.

use crate::error::{Result, RouteError};
use crate::log;
use crate::path::validate_route_path;

/// Association between a path and the view rendered for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<V> {
    pub path: String,
    pub view: V,
}

/// Route table with exact-match resolution.
///
/// Routes keep their registration order. Lookup is a linear scan, which is
/// the right trade for the handful of routes a page set has.
///
/// # Example
/// ```
/// use pagenav_core::{RouteError, RouteTable};
///
/// let mut table = RouteTable::new();
/// table.register("/", "Root").unwrap();
/// table.register("/about", "About").unwrap();
///
/// assert_eq!(table.resolve("/about"), Ok(&"About"));
/// assert!(matches!(table.resolve("/missing"), Err(RouteError::NotFound { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Build a table from `(path, view)` pairs, stopping at the first bad entry.
    pub fn from_routes<P, I>(routes: I) -> Result<Self>
    where
        P: Into<String>,
        I: IntoIterator<Item = (P, V)>,
    {
        let mut table = Self::new();
        for (path, view) in routes {
            table.register(path, view)?;
        }
        Ok(table)
    }

    /// Register a view for `path`.
    ///
    /// Fails with [`RouteError::DuplicateRoute`] if the path is taken and with
    /// [`RouteError::InvalidPath`] if it is not absolute. The table is left
    /// unchanged on failure.
    pub fn register(&mut self, path: impl Into<String>, view: V) -> Result<()> {
        let path = path.into();

        if let Err(err) = validate_route_path(&path) {
            log::warn(&format!("Rejected route: {}", err));
            return Err(err);
        }

        if self.contains(&path) {
            let err = RouteError::DuplicateRoute { path };
            log::warn(&format!("Rejected route: {}", err));
            return Err(err);
        }

        self.routes.push(Route { path, view });
        Ok(())
    }

    /// Resolve `path` to its view. Exact string match only.
    pub fn resolve(&self, path: &str) -> Result<&V> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| &route.view)
            .ok_or_else(|| RouteError::NotFound {
                path: path.to_string(),
            })
    }

    /// Check whether `path` has a registered route.
    pub fn contains(&self, path: &str) -> bool {
        self.routes.iter().any(|route| route.path == path)
    }

    /// Iterate routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
