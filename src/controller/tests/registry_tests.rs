use std::rc::Rc;

use crate::config::Config;
use crate::controller::{registry, Controller};
use crate::host::{EventTarget, MemoryDocument};

// Each test runs on its own thread, so the thread-local registry starts
// empty in every test.

#[test]
fn test_is_bound_follows_the_lifecycle() {
    let document = MemoryDocument::new();
    let _player = document.create_media_element("#player");
    let scope: Rc<dyn EventTarget> = document.clone();

    assert!(!registry::is_bound(&scope));
    assert_eq!(registry::active_count(), 0);

    let controller =
        Controller::bind(document.as_ref(), scope.clone(), "#player", Config::default()).unwrap();
    assert!(registry::is_bound(&scope));
    assert_eq!(registry::active_count(), 1);

    controller.dispose();
    assert!(!registry::is_bound(&scope));
    assert_eq!(registry::active_count(), 0);
}

#[test]
fn test_scopes_are_tracked_independently() {
    let first_document = MemoryDocument::new();
    let _first_player = first_document.create_media_element("#player");
    let first_scope: Rc<dyn EventTarget> = first_document.clone();

    let second_document = MemoryDocument::new();
    let _second_player = second_document.create_media_element("#player");
    let second_scope: Rc<dyn EventTarget> = second_document.clone();

    let first = Controller::bind(
        first_document.as_ref(),
        first_scope.clone(),
        "#player",
        Config::default(),
    )
    .unwrap();
    let _second = Controller::bind(
        second_document.as_ref(),
        second_scope.clone(),
        "#player",
        Config::default(),
    )
    .unwrap();

    assert_eq!(registry::active_count(), 2);

    // Disposing one scope's controller leaves the other bound
    first.dispose();
    assert!(!registry::is_bound(&first_scope));
    assert!(registry::is_bound(&second_scope));
    assert_eq!(registry::active_count(), 1);
}

#[test]
fn test_rebinding_keeps_a_single_entry() {
    let document = MemoryDocument::new();
    let _player = document.create_media_element("#player");
    let scope: Rc<dyn EventTarget> = document.clone();

    let _first =
        Controller::bind(document.as_ref(), scope.clone(), "#player", Config::default()).unwrap();
    let _second =
        Controller::bind(document.as_ref(), scope.clone(), "#player", Config::default()).unwrap();

    assert!(registry::is_bound(&scope));
    assert_eq!(registry::active_count(), 1);
}

#[test]
fn test_dropped_controller_leaves_no_live_binding() {
    let document = MemoryDocument::new();
    let player = document.create_media_element("#player");
    let scope: Rc<dyn EventTarget> = document.clone();

    let controller =
        Controller::bind(document.as_ref(), scope.clone(), "#player", Config::default()).unwrap();
    assert!(registry::is_bound(&scope));

    // Dropping without dispose() disposes anyway: ownership is released
    // and both listeners come out with it
    drop(controller);
    assert!(!registry::is_bound(&scope));
    assert_eq!(registry::active_count(), 0);
    assert_eq!(document.keydown_listener_count(), 0);
    assert_eq!(player.keydown_listener_count(), 0);
}
