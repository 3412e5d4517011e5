//! src/core/types.rs
//!
//! Core type definitions for playback key control
//!
//! This module defines the fundamental types used throughout the crate:
//! - `ModifierCombo`: the four shift/ctrl modifier combinations
//! - `FocusShortcut`: the key + modifier state that moves focus to the target
//! - `StepTable`: a modifier-keyed table of seek/volume step magnitudes
//! - `Action`: a resolved playback command (seek, volume, toggle)
//!
//! All configuration-facing types implement serialization so embedders can
//! persist or load them with any serde format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four shift/ctrl modifier combinations
///
/// Meta is folded into ctrl before a combo is formed (cross-platform
/// convention: Cmd on macOS behaves like Ctrl elsewhere), so a combo is a
/// pure function of two flags.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ModifierCombo {
    /// No modifier held
    None,
    /// Shift only
    Shift,
    /// Ctrl (or Meta) only
    Ctrl,
    /// Shift and Ctrl (or Meta) together
    ShiftCtrl,
}

impl ModifierCombo {
    /// Classifies raw modifier flags into a combo.
    ///
    /// The combined case is checked before either single-modifier case so
    /// shift+ctrl can never fall through to a shift-only or ctrl-only
    /// classification. This ordering is intentional and load-bearing for
    /// magnitude lookup.
    pub fn from_flags(shift: bool, ctrl: bool) -> Self {
        if shift && ctrl {
            ModifierCombo::ShiftCtrl
        } else if shift {
            ModifierCombo::Shift
        } else if ctrl {
            ModifierCombo::Ctrl
        } else {
            ModifierCombo::None
        }
    }
}

impl fmt::Display for ModifierCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierCombo::None => write!(f, "none"),
            ModifierCombo::Shift => write!(f, "shift"),
            ModifierCombo::Ctrl => write!(f, "ctrl"),
            ModifierCombo::ShiftCtrl => write!(f, "shift+ctrl"),
        }
    }
}

/// The key + modifier state that moves keyboard focus onto the target
///
/// A keydown anywhere in scope matches only when the key string and both
/// modifier flags equal this record exactly (meta counts as ctrl).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct FocusShortcut {
    /// Key name (e.g., "e", "Space", "ArrowLeft")
    pub key: String,

    /// Whether ctrl-or-meta must be held
    pub ctrl: bool,

    /// Whether shift must be held
    pub shift: bool,
}

impl FocusShortcut {
    /// Create a new shortcut with a normalized key name.
    pub fn new(key: &str, ctrl: bool, shift: bool) -> Self {
        Self {
            key: crate::host::normalize_key(key),
            ctrl,
            shift,
        }
    }
}

impl fmt::Display for FocusShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// A modifier-keyed table of step magnitudes
///
/// One entry per modifier combination. All four entries exist by
/// construction; a partially specified table cannot be represented, which is
/// what guarantees the resolver never sees a missing magnitude.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct StepTable {
    /// Step when no modifier is held
    pub none: f64,
    /// Step when shift alone is held
    pub shift: f64,
    /// Step when ctrl (or meta) alone is held
    pub ctrl: f64,
    /// Step when shift and ctrl are held together
    pub shift_ctrl: f64,
}

impl StepTable {
    /// Magnitude for the given modifier combination.
    pub fn step(&self, combo: ModifierCombo) -> f64 {
        match combo {
            ModifierCombo::None => self.none,
            ModifierCombo::Shift => self.shift,
            ModifierCombo::Ctrl => self.ctrl,
            ModifierCombo::ShiftCtrl => self.shift_ctrl,
        }
    }
}

/// A resolved playback command, ready to apply to the target
///
/// Magnitudes are already signed: ArrowLeft resolves to a negative seek,
/// ArrowDown to a negative volume adjustment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Move `current_time` by the given number of seconds
    SeekBy(f64),
    /// Move `volume` by the given fraction
    AdjustVolume(f64),
    /// Play if paused, pause otherwise
    TogglePlayback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_combo_display() {
        assert_eq!(format!("{}", ModifierCombo::None), "none");
        assert_eq!(format!("{}", ModifierCombo::ShiftCtrl), "shift+ctrl");
    }

    #[test]
    fn test_combined_checked_before_single_modifiers() {
        assert_eq!(ModifierCombo::from_flags(true, true), ModifierCombo::ShiftCtrl);
        assert_eq!(ModifierCombo::from_flags(true, false), ModifierCombo::Shift);
        assert_eq!(ModifierCombo::from_flags(false, true), ModifierCombo::Ctrl);
        assert_eq!(ModifierCombo::from_flags(false, false), ModifierCombo::None);
    }

    #[test]
    fn test_focus_shortcut_display() {
        let shortcut = FocusShortcut::new("e", true, false);
        assert_eq!(format!("{}", shortcut), "Ctrl+e");

        let shortcut = FocusShortcut::new("e", true, true);
        assert_eq!(format!("{}", shortcut), "Ctrl+Shift+e");
    }

    #[test]
    fn test_focus_shortcut_normalizes_key() {
        let shortcut = FocusShortcut::new(" ", false, false);
        assert_eq!(shortcut.key, "Space");
    }

    #[test]
    fn test_step_table_lookup() {
        let table = StepTable {
            none: 10.0,
            shift: 1.0,
            ctrl: 30.0,
            shift_ctrl: 60.0,
        };

        assert_eq!(table.step(ModifierCombo::None), 10.0);
        assert_eq!(table.step(ModifierCombo::Shift), 1.0);
        assert_eq!(table.step(ModifierCombo::Ctrl), 30.0);
        assert_eq!(table.step(ModifierCombo::ShiftCtrl), 60.0);
    }
}
