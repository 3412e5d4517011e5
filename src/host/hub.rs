//! src/host/hub.rs
//!
//! Listener table shared by host implementations
//!
//! An `EventHub` owns the keydown listeners registered on one event target
//! and dispatches events to them in registration order. It is the building
//! block an `EventTarget` implementation delegates to; the in-memory host
//! uses one per document and one per media element.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::host::event::KeyEvent;
use crate::host::{KeydownListener, ListenerId};

/// Ordered keydown listener table with stable ids for removal
///
/// Single-threaded by design: listeners are stored behind `Rc<RefCell<..>>`
/// so dispatch can run them without holding the table borrow, which lets a
/// listener add or remove listeners on its own target mid-dispatch.
pub struct EventHub {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Rc<RefCell<KeydownListener>>)>>,
}

impl EventHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Registers a listener, returning the id needed to remove it.
    pub fn add(&self, listener: KeydownListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        id
    }

    /// Removes a listener. Returns whether it was present.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Whether the given listener is currently registered.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(listener_id, _)| *listener_id == id)
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Runs the listeners against an event, in registration order.
    ///
    /// Dispatch works on a snapshot of the table: a listener registered
    /// during dispatch does not see the current event, and a listener
    /// removed during dispatch no longer runs. Once a listener stops
    /// immediate propagation the remaining listeners are skipped.
    pub fn dispatch(&self, event: &mut KeyEvent) {
        let snapshot: Vec<(ListenerId, Rc<RefCell<KeydownListener>>)> =
            self.listeners.borrow().clone();

        for (id, listener) in snapshot {
            if event.immediate_propagation_stopped() {
                break;
            }
            if !self.contains(id) {
                continue;
            }
            let mut callback = listener.borrow_mut();
            (&mut **callback)(event);
        }
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let hub = EventHub::new();
        assert!(hub.is_empty());

        let id = hub.add(Box::new(|_| {}));
        assert_eq!(hub.len(), 1);
        assert!(hub.contains(id));

        assert!(hub.remove(id));
        assert!(hub.is_empty());
        assert!(!hub.remove(id));
    }

    #[test]
    fn test_dispatch_runs_in_registration_order() {
        let hub = EventHub::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            hub.add(Box::new(move |_| order.borrow_mut().push(tag)));
        }

        hub.dispatch(&mut KeyEvent::new("a"));
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_immediate_stop_skips_remaining_listeners() {
        let hub = EventHub::new();
        let reached = Rc::new(Cell::new(false));

        hub.add(Box::new(|event| event.stop_immediate_propagation()));
        {
            let reached = Rc::clone(&reached);
            hub.add(Box::new(move |_| reached.set(true)));
        }

        hub.dispatch(&mut KeyEvent::new("a"));
        assert!(!reached.get());
    }

    #[test]
    fn test_listener_removed_mid_dispatch_does_not_run() {
        let hub = Rc::new(EventHub::new());
        let reached = Rc::new(Cell::new(false));

        // The second listener's id is known only after registration, so the
        // first listener reads it out of a shared slot.
        let victim: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        {
            let remover_hub = Rc::clone(&hub);
            let victim = Rc::clone(&victim);
            hub.add(Box::new(move |_| {
                if let Some(id) = victim.get() {
                    remover_hub.remove(id);
                }
            }));
        }
        let id = {
            let reached = Rc::clone(&reached);
            hub.add(Box::new(move |_| reached.set(true)))
        };
        victim.set(Some(id));

        hub.dispatch(&mut KeyEvent::new("a"));
        assert!(!reached.get());
    }
}
