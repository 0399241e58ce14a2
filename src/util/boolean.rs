// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Conversion of free-text appliance states to boolean values.

use lazy_static::lazy_static;
use log::debug;
use serde_json::Value;
use std::collections::HashSet;

lazy_static! {
    static ref ON_VALUES: HashSet<&'static str> = HashSet::from([
        "charging",
        "connected",
        "detected",
        "door open",
        "enabled",
        "home",
        "hot",
        "light",
        "locked",
        "locking",
        "motion",
        "moving",
        "occupied",
        "on",
        "open",
        "plugged",
        "power",
        "problem",
        "running",
        "smoke",
        "sound",
        "tampering",
        "true",
        "unsafe",
        "update available",
        "vibration",
        "wet",
        "yes",
    ]);
    static ref OFF_VALUES: HashSet<&'static str> = HashSet::from([
        "away",
        "clear",
        "closed",
        "disabled",
        "disconnected",
        "door closed",
        "dry",
        "false",
        "no",
        "no light",
        "no motion",
        "no power",
        "no problem",
        "no smoke",
        "no sound",
        "no tampering",
        "no vibration",
        "normal",
        "not charging",
        "not occupied",
        "not running",
        "off",
        "safe",
        "stopped",
        "unlocked",
        "unlocking",
        "unplugged",
        "up-to-date",
    ]);
}

/// Result of [`string_to_boolean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanState<'a> {
    Bool(bool),
    /// The input didn't match a known state and is returned unchanged.
    Unmapped(&'a str),
}

impl BooleanState<'_> {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BooleanState::Bool(v) => Some(*v),
            BooleanState::Unmapped(_) => None,
        }
    }
}

impl From<BooleanState<'_>> for Value {
    fn from(state: BooleanState<'_>) -> Self {
        match state {
            BooleanState::Bool(v) => Value::Bool(v),
            BooleanState::Unmapped(v) => Value::String(v.to_string()),
        }
    }
}

/// Convert an appliance state string like `DOOR_OPEN` or `Not Running` to a boolean.
///
/// The input is normalized (underscores replaced with spaces, trimmed, lower case, whitespace runs
/// collapsed) and looked up in the known on and off states. Unknown states are not an error: if
/// `fallback` is set, the original input is returned, otherwise `false`. Use [`to_boolean_state`]
/// for the default behaviour of returning the input.
pub fn string_to_boolean(value: &str, fallback: bool) -> BooleanState<'_> {
    let normalized = normalize(value);

    if ON_VALUES.contains(normalized.as_str()) {
        return BooleanState::Bool(true);
    }
    if OFF_VALUES.contains(normalized.as_str()) {
        return BooleanState::Bool(false);
    }

    debug!("Unable to convert '{value}' to boolean");
    if fallback {
        BooleanState::Unmapped(value)
    } else {
        BooleanState::Bool(false)
    }
}

/// Convert an appliance state string to a boolean, returning unknown states unchanged.
///
/// Same as `string_to_boolean(value, true)`.
pub fn to_boolean_state(value: &str) -> BooleanState<'_> {
    string_to_boolean(value, true)
}

fn normalize(value: &str) -> String {
    value
        .replace('_', " ")
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
