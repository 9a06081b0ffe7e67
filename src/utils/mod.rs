//! Browser API utilities.
//!
//! - [`history`] - History API sync for the router
//! - [`log`] - console logging

#[cfg(target_arch = "wasm32")]
pub mod history;
pub mod log;
