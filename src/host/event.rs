//! src/host/event.rs
//!
//! Keyboard event representation
//!
//! A `KeyEvent` carries key identity, modifier flags and suppression state.
//! Key names follow the DOM convention of named keys ("ArrowLeft", "Space")
//! with printable keys spelled as their character ("e"). Names are
//! normalized on construction so comparisons stay consistent everywhere.

/// Canonicalizes a key name.
///
/// The DOM reports the space bar as `" "`; this crate names it `"Space"`.
/// Every other name passes through unchanged.
pub fn normalize_key(key: &str) -> String {
    if key == " " {
        "Space".to_string()
    } else {
        key.to_string()
    }
}

/// A keydown event with modifier flags and suppression state
///
/// Listeners receive the event mutably and record their suppression decision
/// on it; the dispatching host then honours `propagation_stopped` /
/// `immediate_propagation_stopped` when deciding which listeners still run.
#[derive(Clone, Debug)]
pub struct KeyEvent {
    /// Normalized key name
    key: String,

    /// Whether shift was held
    pub shift: bool,

    /// Whether ctrl was held
    pub ctrl: bool,

    /// Whether meta (Cmd/Win) was held
    pub meta: bool,

    default_prevented: bool,
    propagation_stopped: bool,
    immediate_stopped: bool,
}

impl KeyEvent {
    /// Creates an unmodified keydown event for the given key.
    pub fn new(key: &str) -> Self {
        Self {
            key: normalize_key(key),
            shift: false,
            ctrl: false,
            meta: false,
            default_prevented: false,
            propagation_stopped: false,
            immediate_stopped: false,
        }
    }

    /// Sets the shift flag (builder style, for tests and embedders).
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Sets the ctrl flag.
    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    /// Sets the meta flag.
    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }

    /// The normalized key name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Ctrl-or-meta, the combined flag the control policy works with.
    pub fn ctrl_or_meta(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Marks the host's default behaviour for this key as cancelled.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stops the event from reaching enclosing targets.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stops the event from reaching any further listener, including
    /// listeners on the same target.
    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_stopped = true;
    }

    /// Full suppression: prevent default and stop all further handling.
    ///
    /// Applied once a keydown has been acted upon, so no other handler can
    /// interpret the same press.
    pub fn suppress(&mut self) {
        self.prevent_default();
        self.stop_immediate_propagation();
    }

    /// Whether default behaviour was cancelled.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether propagation to enclosing targets was stopped.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Whether remaining same-target listeners were cut off as well.
    pub fn immediate_propagation_stopped(&self) -> bool {
        self.immediate_stopped
    }

    /// Whether the event was fully suppressed.
    pub fn suppressed(&self) -> bool {
        self.default_prevented && self.propagation_stopped
    }
}
