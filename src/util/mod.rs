// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Value conversion helpers.

mod boolean;
mod time;

pub use boolean::*;
pub use time::*;
