//! Navigation state and change notification.
//!
//! [`Router`] is the single source of truth for the current path. It is a
//! cheap `Rc` handle: clones share one [`RouterState`]. Everything runs on one
//! thread and completes synchronously, so the type is intentionally `!Send`.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::Result;
use crate::log;
use crate::path::validate_target;

// ============================================================================
// Navigation
// ============================================================================

/// Where a navigation came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationKind {
    /// Triggered by the application (button click, redirect).
    #[default]
    Push,
    /// Restored from browser history (back/forward buttons).
    Pop,
}

/// A single change of the current path, as delivered to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    pub kind: NavigationKind,
}

/// Navigation state owned by a [`Router`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterState {
    current_path: String,
}

impl RouterState {
    pub fn current_path(&self) -> &str {
        &self.current_path
    }
}

// ============================================================================
// Router
// ============================================================================

type Callback = Rc<dyn Fn(&Navigation)>;

struct Subscriber {
    id: u64,
    callback: Callback,
    active: Cell<bool>,
}

struct Inner {
    state: RefCell<RouterState>,
    subscribers: RefCell<Vec<Rc<Subscriber>>>,
    next_id: Cell<u64>,
    /// Navigations waiting for the current notification round to finish.
    pending: RefCell<VecDeque<Navigation>>,
    dispatching: Cell<bool>,
}

impl Inner {
    fn remove(&self, id: u64) {
        let mut subscribers = self.subscribers.borrow_mut();
        if let Some(index) = subscribers.iter().position(|s| s.id == id) {
            let removed = subscribers.remove(index);
            removed.active.set(false);
        }
    }
}

/// Client-side router: tracks the current path and broadcasts changes.
///
/// # Example
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use pagenav_core::Router;
///
/// let router = Router::new("/").unwrap();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let log = seen.clone();
/// let subscription = router.subscribe(move |nav| log.borrow_mut().push(nav.path.clone()));
///
/// router.push("/about").unwrap();
/// assert_eq!(router.current(), "/about");
///
/// subscription.unsubscribe();
/// router.push("/").unwrap();
/// assert_eq!(*seen.borrow(), vec!["/about".to_string()]);
/// ```
#[derive(Clone)]
pub struct Router {
    inner: Rc<Inner>,
}

impl Router {
    /// Create a router positioned at `initial_path`.
    pub fn new(initial_path: impl Into<String>) -> Result<Self> {
        let current_path = initial_path.into();
        validate_target(&current_path)?;

        Ok(Self {
            inner: Rc::new(Inner {
                state: RefCell::new(RouterState { current_path }),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        })
    }

    /// Navigate to `path` and notify subscribers.
    ///
    /// The path does not have to be registered anywhere; resolving it is the
    /// view layer's job. Pushing the current path again still notifies.
    /// Only an empty path is rejected.
    pub fn push(&self, path: impl Into<String>) -> Result<()> {
        self.navigate(path.into(), NavigationKind::Push)
    }

    /// Like [`Router::push`], but tagged as restored from browser history.
    pub fn restore(&self, path: impl Into<String>) -> Result<()> {
        self.navigate(path.into(), NavigationKind::Pop)
    }

    /// Snapshot of the current path.
    pub fn current(&self) -> String {
        self.inner.state.borrow().current_path.clone()
    }

    /// Snapshot of the full router state.
    pub fn state(&self) -> RouterState {
        self.inner.state.borrow().clone()
    }

    /// Register `callback` to run after every navigation.
    ///
    /// Callbacks run in registration order. The returned [`Subscription`]
    /// removes the callback when dropped or unsubscribed.
    ///
    /// A callback that captures this router should hold a [`WeakRouter`];
    /// a strong clone would keep the router alive through its own subscriber
    /// list.
    pub fn subscribe(&self, callback: impl Fn(&Navigation) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        self.inner.subscribers.borrow_mut().push(Rc::new(Subscriber {
            id,
            callback: Rc::new(callback),
            active: Cell::new(true),
        }));

        Subscription {
            id,
            router: Rc::downgrade(&self.inner),
            detached: false,
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    pub fn downgrade(&self) -> WeakRouter {
        WeakRouter {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn navigate(&self, path: String, kind: NavigationKind) -> Result<()> {
        if let Err(err) = validate_target(&path) {
            log::warn(&format!("Navigation rejected: {}", err));
            return Err(err);
        }

        self.inner
            .pending
            .borrow_mut()
            .push_back(Navigation { path, kind });

        // Called from inside a subscriber: the outer round picks it up.
        if self.inner.dispatching.get() {
            return Ok(());
        }

        let _guard = DispatchGuard::enter(&self.inner);
        while let Some(navigation) = self.next_pending() {
            self.inner.state.borrow_mut().current_path = navigation.path.clone();
            log::info(&format!("Navigate ({:?}) -> {}", navigation.kind, navigation.path));

            // Snapshot so callbacks can subscribe/unsubscribe freely.
            let subscribers: Vec<Rc<Subscriber>> = self.inner.subscribers.borrow().clone();
            for subscriber in subscribers {
                if subscriber.active.get() {
                    (subscriber.callback)(&navigation);
                }
            }
        }

        Ok(())
    }

    fn next_pending(&self) -> Option<Navigation> {
        self.inner.pending.borrow_mut().pop_front()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("current_path", &self.inner.state.borrow().current_path)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Marks a notification round in progress.
///
/// On exit the queue is already empty unless a callback panicked; whatever is
/// left belongs to the aborted round and is discarded.
struct DispatchGuard<'a> {
    inner: &'a Inner,
}

impl<'a> DispatchGuard<'a> {
    fn enter(inner: &'a Inner) -> Self {
        inner.dispatching.set(true);
        Self { inner }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.inner.pending.borrow_mut().clear();
        self.inner.dispatching.set(false);
    }
}

/// A weak handle to a [`Router`].
#[derive(Clone)]
pub struct WeakRouter {
    inner: Weak<Inner>,
}

impl WeakRouter {
    /// Upgrade to a strong handle, if the router is still alive.
    pub fn upgrade(&self) -> Option<Router> {
        self.inner.upgrade().map(|inner| Router { inner })
    }
}

// ============================================================================
// Subscription
// ============================================================================

/// Registration handle returned by [`Router::subscribe`].
///
/// Holds only a weak reference to the router. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately; call `detach` to keep it"]
pub struct Subscription {
    id: u64,
    router: Weak<Inner>,
    detached: bool,
}

impl Subscription {
    /// Remove the callback now.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }

    /// Keep the callback registered for the rest of the router's lifetime.
    pub fn detach(mut self) {
        self.detached = true;
    }

    /// Whether the callback is still registered.
    pub fn is_active(&self) -> bool {
        self.router.upgrade().is_some_and(|inner| {
            inner.subscribers.borrow().iter().any(|s| s.id == self.id)
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.detached {
            return;
        }
        if let Some(inner) = self.router.upgrade() {
            inner.remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
