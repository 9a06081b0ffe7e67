//! Minimal client-side routing.
//!
//! - [`RouteTable`] - exact-match mapping from paths to view identifiers
//! - [`Router`] - current path, push navigation, and change subscribers
//! - [`Activate`] - click behavior for button variants
//!
//! The router never consults the route table. A path that does not resolve is
//! still a valid navigation target; the view layer decides what to render.

pub mod action;
pub mod error;
mod log;
pub mod path;
pub mod router;
pub mod table;

pub use action::{Activate, Inert, Navigate};
pub use error::{Result, RouteError};
pub use router::{Navigation, NavigationKind, Router, RouterState, Subscription, WeakRouter};
pub use table::{Route, RouteTable};
