//! Routed pages.
//!
//! - [`RootPage`] - `/`
//! - [`AboutPage`] - `/about`
//! - [`NotFoundPage`] - fallback for paths without a route

mod about;
mod not_found;
mod root;

pub use about::AboutPage;
pub use not_found::NotFoundPage;
pub use root::RootPage;

stylance::import_crate_style!(css, "src/pages/pages.module.css");
