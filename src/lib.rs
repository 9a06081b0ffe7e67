//! Two-page Leptos app on top of `pagenav-core`.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod utils;

pub use app::{App, AppContext};
