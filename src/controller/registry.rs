//! Scope ownership registry
//!
//! Enforces the one-controller-per-scope invariant. Instead of attaching a
//! marker to the scope object itself, ownership lives in an explicit
//! module-scoped map from scope identity (the scope allocation's data
//! pointer) to a weak controller handle. Weak handles mean the registry
//! never extends a controller's lifetime, and dropping a `Controller`
//! disposes it, so every entry here backs a live binding.
//!
//! The map is thread-local because the whole crate is single-threaded
//! event-loop code; each thread's scopes are tracked independently. Entries
//! are created by `Controller::bind` and removed by disposal; there is no
//! other way in or out, which keeps ownership auditable via [`is_bound`]
//! and [`active_count`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::controller::ControllerInner;
use crate::host::EventTarget;

/// Identity of a scope: the address of its allocation.
pub(crate) type ScopeKey = usize;

thread_local! {
    static CONTROLLERS: RefCell<HashMap<ScopeKey, Weak<ControllerInner>>> =
        RefCell::new(HashMap::new());
}

/// Derives the registry key for a scope handle.
pub(crate) fn key_for(scope: &Rc<dyn EventTarget>) -> ScopeKey {
    // Fat pointer metadata is irrelevant for identity; compare allocations
    Rc::as_ptr(scope) as *const () as usize
}

/// The live controller currently bound to the scope, if any.
///
/// Prunes the entry when the controller has already been dropped.
pub(crate) fn bound(key: ScopeKey) -> Option<Rc<ControllerInner>> {
    CONTROLLERS.with(|controllers| {
        let mut controllers = controllers.borrow_mut();
        match controllers.get(&key).and_then(Weak::upgrade) {
            Some(controller) => Some(controller),
            None => {
                controllers.remove(&key);
                None
            }
        }
    })
}

/// Records the scope as owned by the given controller.
pub(crate) fn claim(key: ScopeKey, controller: &Rc<ControllerInner>) {
    CONTROLLERS.with(|controllers| {
        controllers
            .borrow_mut()
            .insert(key, Rc::downgrade(controller));
    });
}

/// Releases the scope's entry, but only if it still belongs to the given
/// controller. A controller disposed after being displaced must not evict
/// its replacement.
pub(crate) fn release(key: ScopeKey, controller: &ControllerInner) {
    CONTROLLERS.with(|controllers| {
        let mut controllers = controllers.borrow_mut();
        let owned_by_caller = controllers
            .get(&key)
            .and_then(Weak::upgrade)
            .is_some_and(|current| std::ptr::eq(Rc::as_ptr(&current), controller));
        if owned_by_caller {
            controllers.remove(&key);
        }
    });
}

/// Whether the scope currently has a live controller bound to it.
pub fn is_bound(scope: &Rc<dyn EventTarget>) -> bool {
    bound(key_for(scope)).is_some()
}

/// Number of scopes with a live controller on this thread.
pub fn active_count() -> usize {
    CONTROLLERS.with(|controllers| {
        controllers
            .borrow()
            .values()
            .filter(|controller| controller.strong_count() > 0)
            .count()
    })
}
