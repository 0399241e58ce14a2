// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Electrolux / AEG appliance capability catalog and value helpers for Home Assistant.

pub mod catalog;
pub mod configuration;
pub mod constants;
pub mod errors;
pub mod notification;
pub mod startup;
pub mod util;

pub use catalog::Catalog;
pub use startup::*;
