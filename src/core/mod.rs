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

//! src/core/mod.rs
//!
//! Core policy module
//!
//! This module contains the decision logic that turns keyboard events into
//! playback commands, including:
//! - Type definitions for modifier combinations, step tables and actions
//! - Focus-shortcut matching (exact key + exact modifier flags)
//! - Action resolution with modifier-keyed magnitude lookup
//!
//! All policy is isolated from listener lifecycle and host concerns to
//! enable unit testing without a live event loop.

pub mod resolver;
pub mod types;

pub use resolver::{matches_focus_shortcut, resolve};
pub use types::*;
