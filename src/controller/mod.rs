// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/controller/mod.rs
//!
//! Controller lifecycle: binding, ownership and disposal
//!
//! A [`Controller`] wires one scope to one media target under one
//! configuration. Binding installs two keydown listeners:
//!
//! - on the scope: checks every keydown against the focus shortcut and, on
//!   a match, moves focus to the target and suppresses the event;
//! - on the target: when the target holds focus, resolves the keydown into
//!   a playback action, applies it, and suppresses the event. Unrecognized
//!   keys and unfocused-target keydowns pass through untouched.
//!
//! At most one controller is bound per scope. Binding to an occupied scope
//! disposes the previous controller first (a supported rebinding flow, e.g.
//! a UI re-render; logged as a warning, not an error). Disposal removes
//! both listeners, releases ownership and is idempotent; dropping a
//! [`Controller`] runs the same teardown, so listeners can never outlive
//! the handle that installed them.

pub mod error;
pub mod registry;

pub use error::BindError;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::Config;
use crate::core::resolver;
use crate::core::types::Action;
use crate::host::{DocumentLookup, EventTarget, ListenerId, MediaTarget};

/// How the target element is specified at bind time: a concrete handle, or
/// a selector resolved against the document.
pub enum TargetSpec {
    /// A media element handle
    Element(Rc<dyn MediaTarget>),
    /// A selector to resolve through [`DocumentLookup`]
    Selector(String),
}

impl TargetSpec {
    /// Resolves to a concrete element handle.
    ///
    /// Selector resolution is the fail-fast step: zero matches surface as
    /// [`BindError::TargetNotFound`] carrying the selector.
    fn resolve(self, document: &dyn DocumentLookup) -> Result<Rc<dyn MediaTarget>, BindError> {
        match self {
            TargetSpec::Element(element) => Ok(element),
            TargetSpec::Selector(selector) => document
                .query_selector(&selector)
                .ok_or(BindError::TargetNotFound(selector)),
        }
    }
}

impl From<&str> for TargetSpec {
    fn from(selector: &str) -> Self {
        TargetSpec::Selector(selector.to_string())
    }
}

impl From<String> for TargetSpec {
    fn from(selector: String) -> Self {
        TargetSpec::Selector(selector)
    }
}

impl From<Rc<dyn MediaTarget>> for TargetSpec {
    fn from(element: Rc<dyn MediaTarget>) -> Self {
        TargetSpec::Element(element)
    }
}

impl<T: MediaTarget + 'static> From<Rc<T>> for TargetSpec {
    fn from(element: Rc<T>) -> Self {
        TargetSpec::Element(element)
    }
}

/// Shared controller state: the two endpoints, the installed listener ids
/// and the disposed flag.
///
/// Listeners capture only weak handles to the target, so the listener
/// tables never keep the element graph alive; the strong references live
/// here and drop with the controller.
pub(crate) struct ControllerInner {
    scope: Rc<dyn EventTarget>,
    target: Rc<dyn MediaTarget>,
    scope_key: registry::ScopeKey,
    scope_listener: ListenerId,
    target_listener: ListenerId,
    disposed: Cell<bool>,
}

impl ControllerInner {
    /// Removes both listeners and releases scope ownership. Idempotent via
    /// the disposed flag; every call after the first is a no-op.
    pub(crate) fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }

        self.scope.remove_keydown_listener(self.scope_listener);
        self.target.remove_keydown_listener(self.target_listener);
        registry::release(self.scope_key, self);
        log::debug!("controller disposed");
    }
}

/// Binds keyboard input on a scope to playback control of one media target.
///
/// # Example
/// ```
/// use std::rc::Rc;
/// use media_keybind::{Config, Controller};
/// use media_keybind::host::{EventTarget, KeyEvent, MediaTarget, MemoryDocument};
///
/// let document = MemoryDocument::new();
/// let player = document.create_media_element("#player");
/// let scope: Rc<dyn EventTarget> = document.clone();
///
/// let controller = Controller::bind(document.as_ref(), scope, "#player", Config::default())?;
///
/// // Ctrl+E anywhere in scope focuses the player
/// document.press_key(KeyEvent::new("e").with_ctrl(true));
/// assert!(player.has_focus());
///
/// // Space toggles playback while the player holds focus
/// document.press_key(KeyEvent::new("Space"));
/// assert!(!player.paused());
///
/// controller.dispose();
/// # Ok::<(), media_keybind::BindError>(())
/// ```
pub struct Controller {
    inner: Rc<ControllerInner>,
}

impl Controller {
    /// Binds a controller: resolves the target, validates the configuration,
    /// displaces any controller already bound to the scope, installs both
    /// keydown listeners and records ownership.
    ///
    /// The side effects run in exactly that order, so a failed bind leaves
    /// no listener installed and no ownership claimed, and the registry
    /// entry is in place before `bind` returns.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::TargetNotFound`] when a selector matches no
    /// element, and [`BindError::InvalidConfig`] when the configuration
    /// fails validation.
    pub fn bind<T: Into<TargetSpec>>(
        document: &dyn DocumentLookup,
        scope: Rc<dyn EventTarget>,
        target: T,
        config: Config,
    ) -> Result<Self, BindError> {
        let target = target.into().resolve(document)?;
        config.validate()?;

        let scope_key = registry::key_for(&scope);
        if let Some(previous) = registry::bound(scope_key) {
            log::warn!("scope already has a controller; disposing the previous one before rebinding");
            previous.dispose();
        }

        log::debug!("binding controller (focus shortcut {})", config.focus_shortcut);

        let shortcut = config.focus_shortcut;
        let focus_target = Rc::downgrade(&target);
        let scope_listener = scope.add_keydown_listener(Box::new(move |event| {
            let Some(target) = focus_target.upgrade() else {
                return;
            };
            if resolver::matches_focus_shortcut(event, &shortcut) {
                target.focus();
                event.suppress();
            }
        }));

        let progress = config.progress;
        let volume = config.volume;
        let dispatch_target = Rc::downgrade(&target);
        let target_listener = target.add_keydown_listener(Box::new(move |event| {
            let Some(target) = dispatch_target.upgrade() else {
                return;
            };
            // Only act on keystrokes meant for the target; anything typed
            // into another focused element passes through untouched
            if !target.has_focus() {
                return;
            }
            if let Some(action) = resolver::resolve(event, &progress, &volume) {
                apply(target.as_ref(), action);
                event.suppress();
            }
        }));

        let inner = Rc::new(ControllerInner {
            scope,
            target,
            scope_key,
            scope_listener,
            target_listener,
            disposed: Cell::new(false),
        });
        registry::claim(scope_key, &inner);

        Ok(Self { inner })
    }

    /// Tears the controller down: removes both listeners and releases the
    /// scope. Safe to call any number of times.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    /// Whether this controller has been disposed (explicitly or by being
    /// displaced from its scope).
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }
}

impl Drop for Controller {
    /// Dropping the handle tears the binding down deterministically, so a
    /// controller that goes out of scope without `dispose()` cannot leave
    /// stale listeners installed. A no-op when already disposed.
    fn drop(&mut self) {
        self.inner.dispose();
    }
}

/// Applies a resolved action to the target. Clamping is the target's job;
/// the controller writes the requested value and moves on.
fn apply(target: &dyn MediaTarget, action: Action) {
    match action {
        Action::SeekBy(delta) => target.set_current_time(target.current_time() + delta),
        Action::AdjustVolume(delta) => target.set_volume(target.volume() + delta),
        Action::TogglePlayback => {
            if target.paused() {
                target.play();
            } else {
                target.pause();
            }
        }
    }
}

#[cfg(test)]
mod tests;
