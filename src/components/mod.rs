//! UI components built with Leptos.
//!
//! - [`RouterOutlet`] - renders the page for the current path
//! - [`ActionButton`] - button driven by an `Activate` behavior

mod button;
mod outlet;

pub use button::ActionButton;
pub use outlet::RouterOutlet;
