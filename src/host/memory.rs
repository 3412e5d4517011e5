//! In-memory host implementation
//!
//! A miniature document tree for driving the controller without a real UI
//! toolkit: one [`MemoryDocument`] holding any number of
//! [`MemoryMediaElement`]s, exact-name selector lookup, document-wide focus
//! tracking, and keydown dispatch that bubbles from the focused element to
//! the document. Everything is single-threaded (`Rc`/`Cell`/`RefCell`),
//! matching the event-loop model the controller assumes.
//!
//! The selector "syntax" is deliberately plain: `query_selector` matches the
//! exact name an element was created under. This host is not a CSS engine.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::host::event::KeyEvent;
use crate::host::hub::EventHub;
use crate::host::{DocumentLookup, EventTarget, KeydownListener, ListenerId, MediaTarget};

/// Document-wide focus owner, shared between the document and its elements.
struct FocusState {
    focused: RefCell<Option<Weak<MemoryMediaElement>>>,
}

/// An in-memory document: scope-level event target, element registry and
/// focus owner.
pub struct MemoryDocument {
    hub: EventHub,
    elements: RefCell<Vec<Rc<MemoryMediaElement>>>,
    focus: Rc<FocusState>,
}

impl MemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            hub: EventHub::new(),
            elements: RefCell::new(Vec::new()),
            focus: Rc::new(FocusState {
                focused: RefCell::new(None),
            }),
        })
    }

    /// Creates a media element registered under the given selector name.
    ///
    /// The element starts paused at position 0.0 with volume 1.0 and an
    /// unbounded duration.
    pub fn create_media_element(&self, name: &str) -> Rc<MemoryMediaElement> {
        let element = Rc::new_cyclic(|handle| MemoryMediaElement {
            name: name.to_string(),
            hub: EventHub::new(),
            current_time: Cell::new(0.0),
            duration: Cell::new(f64::INFINITY),
            volume: Cell::new(1.0),
            paused: Cell::new(true),
            focus: Rc::clone(&self.focus),
            self_handle: handle.clone(),
        });
        self.elements.borrow_mut().push(Rc::clone(&element));
        element
    }

    /// The element currently holding keyboard focus, if any.
    pub fn focused_element(&self) -> Option<Rc<MemoryMediaElement>> {
        self.focus.focused.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Clears keyboard focus.
    pub fn blur(&self) {
        *self.focus.focused.borrow_mut() = None;
    }

    /// Delivers a keydown the way a focused-element press reaches a page:
    /// first to the focused element's listeners, then, unless propagation
    /// was stopped, to the document's own listeners.
    ///
    /// Returns the event so callers can inspect its suppression state.
    pub fn press_key(&self, mut event: KeyEvent) -> KeyEvent {
        if let Some(element) = self.focused_element() {
            element.hub.dispatch(&mut event);
        }
        if !event.propagation_stopped() {
            self.hub.dispatch(&mut event);
        }
        event
    }

    /// Number of keydown listeners installed on the document itself.
    pub fn keydown_listener_count(&self) -> usize {
        self.hub.len()
    }
}

impl EventTarget for MemoryDocument {
    fn add_keydown_listener(&self, listener: KeydownListener) -> ListenerId {
        self.hub.add(listener)
    }

    fn remove_keydown_listener(&self, id: ListenerId) -> bool {
        self.hub.remove(id)
    }

    fn dispatch_keydown(&self, event: &mut KeyEvent) {
        self.hub.dispatch(event);
    }
}

impl DocumentLookup for MemoryDocument {
    fn query_selector(&self, selector: &str) -> Option<Rc<dyn MediaTarget>> {
        self.elements
            .borrow()
            .iter()
            .find(|element| element.name == selector)
            .map(|element| Rc::clone(element) as Rc<dyn MediaTarget>)
    }
}

/// An in-memory media element: playback state, focus capability and its own
/// keydown listener table.
///
/// Clamps its own values the way a browser media element does:
/// `current_time` to `0..=duration`, `volume` to `0..=1`. Callers that need
/// the effective value read it back after writing.
pub struct MemoryMediaElement {
    name: String,
    hub: EventHub,
    current_time: Cell<f64>,
    duration: Cell<f64>,
    volume: Cell<f64>,
    paused: Cell<bool>,
    focus: Rc<FocusState>,
    self_handle: Weak<MemoryMediaElement>,
}

impl MemoryMediaElement {
    /// The selector name this element was created under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the media duration used as the upper seek bound.
    pub fn set_duration(&self, seconds: f64) {
        self.duration.set(seconds);
        // Re-clamp in case the position now lies past the end
        self.current_time
            .set(self.current_time.get().clamp(0.0, seconds));
    }

    /// Number of keydown listeners installed on this element.
    pub fn keydown_listener_count(&self) -> usize {
        self.hub.len()
    }
}

impl EventTarget for MemoryMediaElement {
    fn add_keydown_listener(&self, listener: KeydownListener) -> ListenerId {
        self.hub.add(listener)
    }

    fn remove_keydown_listener(&self, id: ListenerId) -> bool {
        self.hub.remove(id)
    }

    fn dispatch_keydown(&self, event: &mut KeyEvent) {
        self.hub.dispatch(event);
    }
}

impl MediaTarget for MemoryMediaElement {
    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.current_time
            .set(seconds.clamp(0.0, self.duration.get()));
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn set_volume(&self, level: f64) {
        self.volume.set(level.clamp(0.0, 1.0));
    }

    fn paused(&self) -> bool {
        self.paused.get()
    }

    fn play(&self) {
        self.paused.set(false);
    }

    fn pause(&self) {
        self.paused.set(true);
    }

    fn focus(&self) {
        *self.focus.focused.borrow_mut() = Some(self.self_handle.clone());
    }

    fn has_focus(&self) -> bool {
        self.focus
            .focused
            .borrow()
            .as_ref()
            .is_some_and(|focused| focused.ptr_eq(&self.self_handle))
    }
}
