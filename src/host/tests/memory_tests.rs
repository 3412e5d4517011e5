use std::cell::Cell;
use std::rc::Rc;

use crate::host::{DocumentLookup, EventTarget, KeyEvent, MediaTarget, MemoryDocument};

#[test]
fn test_query_selector_exact_match() {
    let document = MemoryDocument::new();
    let player = document.create_media_element("#player");
    assert_eq!(player.name(), "#player");

    let found = document.query_selector("#player").unwrap();
    assert!(Rc::ptr_eq(&(player as Rc<dyn MediaTarget>), &found));

    assert!(document.query_selector("#other").is_none());
    assert!(document.query_selector("player").is_none());
}

#[test]
fn test_focus_moves_between_elements() {
    let document = MemoryDocument::new();
    let first = document.create_media_element("#first");
    let second = document.create_media_element("#second");

    assert!(!first.has_focus());
    assert!(document.focused_element().is_none());

    first.focus();
    assert!(first.has_focus());
    assert!(!second.has_focus());

    second.focus();
    assert!(!first.has_focus());
    assert!(second.has_focus());

    document.blur();
    assert!(!second.has_focus());
}

#[test]
fn test_element_clamps_volume_and_position() {
    let document = MemoryDocument::new();
    let player = document.create_media_element("#player");

    player.set_volume(1.7);
    assert_eq!(player.volume(), 1.0);
    player.set_volume(-0.3);
    assert_eq!(player.volume(), 0.0);

    player.set_current_time(-5.0);
    assert_eq!(player.current_time(), 0.0);

    player.set_duration(120.0);
    player.set_current_time(500.0);
    assert_eq!(player.current_time(), 120.0);
}

#[test]
fn test_shrinking_duration_reclamps_position() {
    let document = MemoryDocument::new();
    let player = document.create_media_element("#player");

    player.set_current_time(90.0);
    player.set_duration(60.0);
    assert_eq!(player.current_time(), 60.0);
}

#[test]
fn test_play_pause_flips_paused() {
    let document = MemoryDocument::new();
    let player = document.create_media_element("#player");

    assert!(player.paused());
    player.play();
    assert!(!player.paused());
    player.pause();
    assert!(player.paused());
}

#[test]
fn test_press_key_reaches_focused_element_then_document() {
    let document = MemoryDocument::new();
    let player = document.create_media_element("#player");

    let element_saw = Rc::new(Cell::new(false));
    let document_saw = Rc::new(Cell::new(false));
    {
        let element_saw = Rc::clone(&element_saw);
        player.add_keydown_listener(Box::new(move |_| element_saw.set(true)));
    }
    {
        let document_saw = Rc::clone(&document_saw);
        document.add_keydown_listener(Box::new(move |_| document_saw.set(true)));
    }

    // Unfocused element sees nothing; the document still does
    document.press_key(KeyEvent::new("a"));
    assert!(!element_saw.get());
    assert!(document_saw.get());

    player.focus();
    element_saw.set(false);
    document_saw.set(false);
    document.press_key(KeyEvent::new("a"));
    assert!(element_saw.get());
    assert!(document_saw.get());
}

#[test]
fn test_stopped_propagation_does_not_bubble_to_document() {
    let document = MemoryDocument::new();
    let player = document.create_media_element("#player");
    player.focus();

    player.add_keydown_listener(Box::new(|event| event.stop_propagation()));

    let document_saw = Rc::new(Cell::new(false));
    {
        let document_saw = Rc::clone(&document_saw);
        document.add_keydown_listener(Box::new(move |_| document_saw.set(true)));
    }

    let event = document.press_key(KeyEvent::new("a"));
    assert!(event.propagation_stopped());
    assert!(!document_saw.get());
}

#[test]
fn test_listener_removal_via_trait() {
    let document = MemoryDocument::new();
    let seen = Rc::new(Cell::new(0u32));

    let id = {
        let seen = Rc::clone(&seen);
        document.add_keydown_listener(Box::new(move |_| seen.set(seen.get() + 1)))
    };

    document.press_key(KeyEvent::new("a"));
    assert_eq!(seen.get(), 1);

    assert!(document.remove_keydown_listener(id));
    document.press_key(KeyEvent::new("a"));
    assert_eq!(seen.get(), 1);
}
