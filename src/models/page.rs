//! View identifiers used as route table values.

use serde::Deserialize;

/// Pages the router can render.
///
/// Named in `routes.toml` by their lowercase identifier (`root`, `about`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Landing page: `/`
    Root,
    /// About page: `/about`
    About,
}
