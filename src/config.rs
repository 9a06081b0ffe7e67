//! Application configuration.
//!
//! Centralizes configuration constants. The route table is loaded at compile
//! time from `assets/routes.toml` using `include_str!` and parsed on startup.

use pagenav_core::{RouteError, RouteTable};
use serde::Deserialize;
use thiserror::Error;

use crate::models::Page;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the console log prefix.
pub const APP_NAME: &str = "pagenav";

// =============================================================================
// Routing
// =============================================================================

/// Route table source (loaded at compile time).
pub const ROUTES_TOML: &str = include_str!("../assets/routes.toml");

/// Path the router starts at when the config and the browser location are silent.
pub const DEFAULT_INITIAL_PATH: &str = "/";

/// Route configuration as written in `routes.toml`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RouteConfig {
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// A single `[[routes]]` entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub page: Page,
}

fn default_initial_path() -> String {
    DEFAULT_INITIAL_PATH.to_string()
}

/// Errors raised while loading the route configuration.
///
/// All of them are configuration bugs; the app refuses to start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid routes.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),
}

impl RouteConfig {
    /// Parse a TOML route configuration.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Build the route table, failing on the first invalid or duplicate path.
    pub fn route_table(&self) -> Result<RouteTable<Page>, ConfigError> {
        let routes = self
            .routes
            .iter()
            .map(|entry| (entry.path.clone(), entry.page));
        Ok(RouteTable::from_routes(routes)?)
    }
}

/// Load the bundled route configuration.
pub fn load_routes() -> Result<RouteConfig, ConfigError> {
    RouteConfig::parse(ROUTES_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_routes() {
        let config = load_routes().unwrap();
        assert_eq!(config.initial_path, "/");

        let table = config.route_table().unwrap();
        assert_eq!(table.resolve("/"), Ok(&Page::Root));
        assert_eq!(table.resolve("/about"), Ok(&Page::About));
        assert!(table.resolve("/missing").is_err());
    }

    #[test]
    fn test_initial_path_defaults_to_root() {
        let config = RouteConfig::parse(
            r#"
            [[routes]]
            path = "/about"
            page = "about"
            "#,
        )
        .unwrap();
        assert_eq!(config.initial_path, DEFAULT_INITIAL_PATH);
        assert_eq!(config.routes.len(), 1);
    }

    #[test]
    fn test_unknown_page_is_parse_error() {
        let result = RouteConfig::parse(
            r#"
            [[routes]]
            path = "/contact"
            page = "contact"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_duplicate_path_is_route_error() {
        let config = RouteConfig::parse(
            r#"
            [[routes]]
            path = "/"
            page = "root"

            [[routes]]
            path = "/"
            page = "about"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.route_table(),
            Err(ConfigError::Routes(RouteError::DuplicateRoute { .. }))
        ));
    }

    #[test]
    fn test_relative_path_is_route_error() {
        let config = RouteConfig::parse(
            r#"
            [[routes]]
            path = "about"
            page = "about"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.route_table(),
            Err(ConfigError::Routes(RouteError::InvalidPath { .. }))
        ));
    }
}
