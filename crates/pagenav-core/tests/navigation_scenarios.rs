//! End-to-end navigation between the Root and About pages.

use std::cell::RefCell;
use std::rc::Rc;

use pagenav_core::{Activate, Inert, Navigate, RouteError, RouteTable, Router};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Root,
    About,
}

fn pages() -> RouteTable<Page> {
    RouteTable::from_routes([("/", Page::Root), ("/about", Page::About)])
        .expect("page routes are valid")
}

#[test]
fn test_root_to_about_and_back() {
    let table = pages();
    let router = Router::new("/").unwrap();
    assert_eq!(table.resolve(&router.current()), Ok(&Page::Root));

    // "Go to About" on the Root page
    Navigate::to("/about").on_activate(&router);
    assert_eq!(router.current(), "/about");
    assert_eq!(table.resolve(&router.current()), Ok(&Page::About));

    // "About Page" is a label
    Inert.on_activate(&router);
    assert_eq!(router.current(), "/about");

    // "Go to Root" on the About page
    Navigate::to("/").on_activate(&router);
    assert_eq!(router.current(), "/");
    assert_eq!(table.resolve(&router.current()), Ok(&Page::Root));
}

#[test]
fn test_unknown_path_navigates_but_does_not_resolve() {
    let table = pages();
    let router = Router::new("/").unwrap();

    router.push("/missing").unwrap();

    assert_eq!(router.current(), "/missing");
    assert_eq!(
        table.resolve(&router.current()),
        Err(RouteError::NotFound {
            path: "/missing".to_string()
        })
    );
}

#[test]
fn test_view_layer_rerenders_on_every_push() {
    let table = pages();
    let router = Router::new("/").unwrap();
    let rendered: Rc<RefCell<Vec<Option<Page>>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&rendered);
    let subscription = router.subscribe(move |nav| {
        sink.borrow_mut().push(table.resolve(&nav.path).ok().copied());
    });

    router.push("/about").unwrap();
    router.push("/about").unwrap();
    router.push("/nowhere").unwrap();
    router.push("/").unwrap();

    // Unmounting the view releases its subscription
    subscription.unsubscribe();
    router.push("/about").unwrap();

    assert_eq!(
        *rendered.borrow(),
        vec![Some(Page::About), Some(Page::About), None, Some(Page::Root)]
    );
    assert_eq!(router.subscriber_count(), 0);
}

#[test]
fn test_duplicate_configuration_fails_fast() {
    let result = RouteTable::from_routes([
        ("/", Page::Root),
        ("/about", Page::About),
        ("/about", Page::Root),
    ]);
    assert_eq!(
        result.unwrap_err(),
        RouteError::DuplicateRoute {
            path: "/about".to_string()
        }
    );
}
