//! Controller configuration with compiled-in defaults and partial overrides.
//!
//! A [`Config`] is the immutable record a controller is bound with: the
//! focus shortcut plus the two modifier-keyed step tables (seek seconds and
//! volume fraction). Key properties:
//!
//! - **Complete by construction**: step tables are plain structs with one
//!   field per modifier combination, so a table with missing entries cannot
//!   exist, and the resolver never needs a fallback value.
//! - **Exact defaults**: [`Config::default`] reproduces the compatibility
//!   defaults (Ctrl+E focus; 10/1/30/60 second seeks; 0.1/0.01/0.25/0.5
//!   volume steps).
//! - **Shallow merge**: [`ConfigOverrides`] replaces whole parts; a
//!   provided table swaps in all four entries at once.
//! - **Validated values**: [`Config::validate`] rejects negative steps,
//!   volume steps above 1 and an empty focus key before a controller will
//!   accept the record.
//!
//! All types serialize, so overrides can come from JSON or any serde format:
//!
//! ```
//! use media_keybind::config::{Config, ConfigOverrides};
//!
//! let overrides: ConfigOverrides =
//!     serde_json::from_str(r#"{ "volume": { "none": 0.2, "shift": 0.05, "ctrl": 0.3, "shift_ctrl": 0.6 } }"#)?;
//! let config = Config::default().with_overrides(overrides);
//!
//! assert_eq!(config.volume.none, 0.2);
//! assert_eq!(config.progress.none, 10.0); // untouched part keeps its default
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};

use crate::core::types::{FocusShortcut, ModifierCombo, StepTable};

/// The immutable configuration a controller is bound with.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Key + modifier state that moves focus onto the target
    pub focus_shortcut: FocusShortcut,

    /// Seek step magnitudes in seconds, per modifier combination
    pub progress: StepTable,

    /// Volume step magnitudes as fractions, per modifier combination
    pub volume: StepTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            focus_shortcut: FocusShortcut::new("e", true, false),
            progress: StepTable {
                none: 10.0,
                shift: 1.0,
                ctrl: 30.0,
                shift_ctrl: 60.0,
            },
            volume: StepTable {
                none: 0.1,
                shift: 0.01,
                ctrl: 0.25,
                shift_ctrl: 0.5,
            },
        }
    }
}

impl Config {
    /// Applies a partial override on top of this configuration.
    ///
    /// The merge is shallow: each provided part replaces the corresponding
    /// part wholesale, which is what keeps every table fully populated.
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            focus_shortcut: overrides.focus_shortcut.unwrap_or(self.focus_shortcut),
            progress: overrides.progress.unwrap_or(self.progress),
            volume: overrides.volume.unwrap_or(self.volume),
        }
    }

    /// Checks every configured value before a controller may use the record.
    ///
    /// Seek steps must be non-negative; volume steps must additionally stay
    /// within `0..=1` (a larger step could never be applied meaningfully);
    /// the focus key must be non-empty. The defaults always validate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.focus_shortcut.key.is_empty() {
            return Err(ConfigError::EmptyFocusKey);
        }

        for (combo, value) in entries(&self.progress) {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeStep {
                    table: "progress",
                    combo,
                    value,
                });
            }
        }

        for (combo, value) in entries(&self.volume) {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeStep {
                    table: "volume",
                    combo,
                    value,
                });
            }
            if value > 1.0 {
                return Err(ConfigError::VolumeStepOutOfRange { combo, value });
            }
        }

        Ok(())
    }
}

/// A partial configuration, merged over the defaults with
/// [`Config::with_overrides`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ConfigOverrides {
    /// Replacement focus shortcut, if any
    pub focus_shortcut: Option<FocusShortcut>,

    /// Replacement seek-step table, if any
    pub progress: Option<StepTable>,

    /// Replacement volume-step table, if any
    pub volume: Option<StepTable>,
}

/// All four entries of a table, paired with their combos, in tie-break order.
fn entries(table: &StepTable) -> [(ModifierCombo, f64); 4] {
    [
        (ModifierCombo::ShiftCtrl, table.shift_ctrl),
        (ModifierCombo::Shift, table.shift),
        (ModifierCombo::Ctrl, table.ctrl),
        (ModifierCombo::None, table.none),
    ]
}
