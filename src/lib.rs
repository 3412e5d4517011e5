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

//! Media Keybind
//!
//! Binds keyboard input on a scope to playback control of a single media
//! target: seek and volume steps scaled by a modifier-keyed table, Space to
//! toggle play/pause, and a focus shortcut that moves keyboard focus onto
//! the target from anywhere in scope.
//!
//! # Features
//!
//! - **Modifier-keyed magnitudes:** Separate seek/volume step sizes for
//!   none, shift, ctrl and shift+ctrl (meta counts as ctrl)
//! - **Focus shortcut:** Exact key + modifier match moves focus to the target
//! - **Single ownership:** At most one controller per scope; rebinding
//!   displaces the previous controller and logs a warning
//! - **Fail-fast binding:** Selector misses and invalid configuration fail
//!   before any listener is installed
//! - **Pass-through by default:** Unrecognized keys and keystrokes for other
//!   focused elements are left completely untouched
//!
//! # Architecture
//!
//! - **`core`:** Key-event interpretation policy (types, shortcut matching,
//!   action resolution)
//! - **`config`:** Configuration record, defaults, partial overrides,
//!   validation
//! - **`host`:** Environment boundary (event/focus/media traits) plus an
//!   in-memory implementation
//! - **`controller`:** Listener lifecycle, scope ownership registry,
//!   disposal
//!
//! # Examples
//!
//! ## Binding a controller and driving it with keys
//!
//! ```
//! use std::rc::Rc;
//! use media_keybind::{Config, Controller};
//! use media_keybind::host::{EventTarget, KeyEvent, MediaTarget, MemoryDocument};
//!
//! let document = MemoryDocument::new();
//! let player = document.create_media_element("#player");
//! let scope: Rc<dyn EventTarget> = document.clone();
//!
//! let controller = Controller::bind(document.as_ref(), scope, "#player", Config::default())?;
//!
//! player.focus();
//! document.press_key(KeyEvent::new("ArrowRight").with_ctrl(true));
//! assert_eq!(player.current_time(), 30.0);
//!
//! controller.dispose();
//! # Ok::<(), media_keybind::BindError>(())
//! ```
//!
//! ## Overriding part of the configuration
//!
//! ```
//! use media_keybind::{Config, ConfigOverrides};
//! use media_keybind::core::types::StepTable;
//!
//! let config = Config::default().with_overrides(ConfigOverrides {
//!     progress: Some(StepTable { none: 5.0, shift: 0.5, ctrl: 15.0, shift_ctrl: 45.0 }),
//!     ..ConfigOverrides::default()
//! });
//!
//! assert_eq!(config.progress.ctrl, 15.0);
//! assert_eq!(config.volume.ctrl, 0.25); // defaults elsewhere
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod host;

// Re-export commonly used types for convenience
pub use crate::config::{Config, ConfigError, ConfigOverrides};
pub use crate::controller::{BindError, Controller, TargetSpec};
pub use crate::core::{Action, FocusShortcut, ModifierCombo, StepTable};
