// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Custom application error with conversions from 3rd-party errors.

use derive_more::Display;
use log::error;

#[derive(Debug, Display, PartialEq)]
pub enum ServiceError {
    #[display("Configuration error: {_0}")]
    ConfigurationError(String),

    /// A compiled-in catalog entry violates a descriptor invariant.
    #[display("Invalid catalog entry '{path}': {reason}")]
    InvalidCatalog { path: String, reason: String },
}

impl std::error::Error for ServiceError {}

impl From<config::ConfigError> for ServiceError {
    fn from(e: config::ConfigError) -> Self {
        error!("{e:?}");
        ServiceError::ConfigurationError(e.to_string())
    }
}
