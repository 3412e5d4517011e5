use thiserror::Error;

use crate::core::types::ModifierCombo;

/// Errors that can occur while validating a controller configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Focus shortcut has no key to match against.
    #[error("Focus shortcut key must not be empty")]
    EmptyFocusKey,

    /// A step magnitude is negative.
    #[error("{table} step for the {combo} modifier combination must be non-negative, got {value}")]
    NegativeStep {
        /// Which table the entry belongs to ("progress" or "volume")
        table: &'static str,
        /// The modifier combination whose entry is invalid
        combo: ModifierCombo,
        /// The offending value
        value: f64,
    },

    /// A volume step lies outside the representable volume range.
    #[error("Volume step for the {combo} modifier combination must be within 0..=1, got {value}")]
    VolumeStepOutOfRange {
        /// The modifier combination whose entry is invalid
        combo: ModifierCombo,
        /// The offending value
        value: f64,
    },
}
