//! Data models and types for the application.
//!
//! - [`Page`] - view identifiers stored in the route table

mod page;

pub use page::Page;
