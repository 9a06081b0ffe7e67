//! Button activation behavior.
//!
//! Each button variant implements [`Activate`]; the view layer calls
//! `on_activate` from its click handler without knowing which variant it has.

use crate::log;
use crate::router::Router;

/// Something a button does when activated.
pub trait Activate {
    fn on_activate(&self, router: &Router);
}

/// Navigate to a fixed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigate {
    pub path: &'static str,
}

impl Navigate {
    pub const fn to(path: &'static str) -> Self {
        Self { path }
    }
}

impl Activate for Navigate {
    fn on_activate(&self, router: &Router) {
        if let Err(err) = router.push(self.path) {
            log::warn(&format!("Button navigation to '{}' failed: {}", self.path, err));
        }
    }
}

/// A label-only button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Inert;

impl Activate for Inert {
    fn on_activate(&self, _router: &Router) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_navigate_pushes_path() {
        let router = Router::new("/").unwrap();
        Navigate::to("/about").on_activate(&router);
        assert_eq!(router.current(), "/about");
    }

    #[test]
    fn test_inert_does_not_notify() {
        let router = Router::new("/").unwrap();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let _sub = router.subscribe(move |_| counter.set(counter.get() + 1));

        Inert.on_activate(&router);

        assert_eq!(calls.get(), 0);
        assert_eq!(router.current(), "/");
    }

    #[test]
    fn test_empty_navigate_is_swallowed() {
        let router = Router::new("/about").unwrap();
        Navigate::to("").on_activate(&router);
        assert_eq!(router.current(), "/about");
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let router = Router::new("/").unwrap();
        let buttons: Vec<Box<dyn Activate>> =
            vec![Box::new(Inert), Box::new(Navigate::to("/about"))];
        for button in &buttons {
            button.on_activate(&router);
        }
        assert_eq!(router.current(), "/about");
    }
}
