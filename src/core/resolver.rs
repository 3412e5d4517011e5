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

//! Key-event interpretation policy
//!
//! Two pure decision functions over a keydown event:
//! - `matches_focus_shortcut`: does this event match the configured
//!   focus shortcut exactly (key string plus both modifier flags)?
//! - `resolve`: which playback action does this event request, and at what
//!   magnitude from the modifier-keyed step tables?
//!
//! Both treat meta as an alias for ctrl, reflecting cross-platform modifier
//! conventions (Cmd on macOS, Ctrl elsewhere). Neither function touches the
//! target or the event's suppression state; applying the decision is the
//! controller's job.

use crate::core::types::{Action, FocusShortcut, ModifierCombo, StepTable};
use crate::host::KeyEvent;

/// Checks a keydown event against the focus shortcut.
///
/// Match requires exact key-string equality AND exact equality of the
/// ctrl-or-meta flag against the configured ctrl flag AND exact equality of
/// the shift flag. A single mismatched flag fails the match, so e.g.
/// Ctrl+Shift+E does not trigger a Ctrl+E shortcut.
pub fn matches_focus_shortcut(event: &KeyEvent, shortcut: &FocusShortcut) -> bool {
    event.key() == shortcut.key
        && event.ctrl_or_meta() == shortcut.ctrl
        && event.shift == shortcut.shift
}

/// Resolves a keydown event into a playback action.
///
/// Returns `None` for any key outside the control set; the caller must then
/// leave the event fully untouched so it reaches whatever else is listening.
/// Magnitudes come from the step tables keyed by the event's modifier combo
/// and are returned pre-signed (left/down negative, right/up positive).
pub fn resolve(event: &KeyEvent, progress: &StepTable, volume: &StepTable) -> Option<Action> {
    let combo = ModifierCombo::from_flags(event.shift, event.ctrl_or_meta());

    match event.key() {
        "ArrowLeft" => Some(Action::SeekBy(-progress.step(combo))),
        "ArrowRight" => Some(Action::SeekBy(progress.step(combo))),
        "ArrowUp" => Some(Action::AdjustVolume(volume.step(combo))),
        "ArrowDown" => Some(Action::AdjustVolume(-volume.step(combo))),
        "Space" => Some(Action::TogglePlayback),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortcut() -> FocusShortcut {
        FocusShortcut::new("e", true, false)
    }

    #[test]
    fn test_shortcut_matches_exact_flags() {
        let event = KeyEvent::new("e").with_ctrl(true);
        assert!(matches_focus_shortcut(&event, &shortcut()));
    }

    #[test]
    fn test_shortcut_meta_aliases_ctrl() {
        let event = KeyEvent::new("e").with_meta(true);
        assert!(matches_focus_shortcut(&event, &shortcut()));
    }

    #[test]
    fn test_shortcut_rejects_extra_shift() {
        let event = KeyEvent::new("e").with_ctrl(true).with_shift(true);
        assert!(!matches_focus_shortcut(&event, &shortcut()));
    }

    #[test]
    fn test_shortcut_rejects_missing_ctrl() {
        let event = KeyEvent::new("e");
        assert!(!matches_focus_shortcut(&event, &shortcut()));
    }

    #[test]
    fn test_shortcut_rejects_wrong_key() {
        let event = KeyEvent::new("f").with_ctrl(true);
        assert!(!matches_focus_shortcut(&event, &shortcut()));
    }

    #[test]
    fn test_unknown_key_resolves_to_none() {
        let progress = StepTable { none: 10.0, shift: 1.0, ctrl: 30.0, shift_ctrl: 60.0 };
        let volume = StepTable { none: 0.1, shift: 0.01, ctrl: 0.25, shift_ctrl: 0.5 };

        let event = KeyEvent::new("a");
        assert_eq!(resolve(&event, &progress, &volume), None);
    }
}
