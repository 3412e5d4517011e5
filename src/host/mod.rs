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

//! Host environment boundary
//!
//! The controller does not own a windowing system or a media engine; it
//! talks to whatever the embedder provides through three small traits:
//!
//! - [`EventTarget`]: something keydown listeners can be installed on
//! - [`MediaTarget`]: a focusable media element with mutable playback state
//! - [`DocumentLookup`]: element lookup by selector
//!
//! [`memory`] provides a complete single-threaded in-memory implementation
//! (document, media elements, focus tracking, bubbling dispatch). The test
//! suite runs against it, and embedders without a UI toolkit can use it
//! directly; embedders with one implement the traits against their own tree.
//!
//! # Example
//! ```
//! use media_keybind::host::{KeyEvent, MediaTarget, MemoryDocument};
//!
//! let document = MemoryDocument::new();
//! let player = document.create_media_element("#player");
//!
//! player.focus();
//! assert!(player.has_focus());
//!
//! // No controller bound yet, so keys pass through untouched
//! let event = document.press_key(KeyEvent::new("Space"));
//! assert!(!event.suppressed());
//! ```

pub mod event;
pub mod hub;
pub mod memory;

#[cfg(test)]
mod tests;

pub use event::{normalize_key, KeyEvent};
pub use hub::EventHub;
pub use memory::{MemoryDocument, MemoryMediaElement};

use std::rc::Rc;

/// Identifies an installed keydown listener for later removal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ListenerId(pub(crate) u64);

/// A keydown callback installed on an [`EventTarget`].
pub type KeydownListener = Box<dyn FnMut(&mut KeyEvent)>;

/// An object keydown listeners can be installed on
///
/// Listeners run synchronously, in registration order, when the host
/// dispatches a keydown at this target. Implementations must honour the
/// event's immediate-stop flag within a dispatch and must not run a
/// listener that was removed before its turn.
pub trait EventTarget {
    /// Installs a keydown listener, returning the id needed to remove it.
    fn add_keydown_listener(&self, listener: KeydownListener) -> ListenerId;

    /// Removes a previously installed listener. Returns whether it existed.
    fn remove_keydown_listener(&self, id: ListenerId) -> bool;

    /// Delivers a keydown to this target's listeners.
    fn dispatch_keydown(&self, event: &mut KeyEvent);
}

/// A focusable media element with mutable playback state
///
/// The element owns value clamping: `set_current_time` and `set_volume` may
/// store less than was asked for, and callers read back the effective value
/// rather than assuming their write landed unchanged.
pub trait MediaTarget: EventTarget {
    /// Playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position, clamped by the element.
    fn set_current_time(&self, seconds: f64);

    /// Volume as a fraction in 0..=1.
    fn volume(&self) -> f64;

    /// Sets the volume, clamped by the element.
    fn set_volume(&self, level: f64);

    /// Whether playback is currently paused.
    fn paused(&self) -> bool;

    /// Starts playback.
    fn play(&self);

    /// Pauses playback.
    fn pause(&self);

    /// Moves keyboard focus onto this element.
    fn focus(&self);

    /// Whether this element currently holds keyboard focus.
    fn has_focus(&self) -> bool;
}

/// Element lookup by selector, scoped to a document.
pub trait DocumentLookup {
    /// Resolves a selector to a media element, or `None` if nothing matches.
    fn query_selector(&self, selector: &str) -> Option<Rc<dyn MediaTarget>>;
}
