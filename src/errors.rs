// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failures coming back from the backend or the wire.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message} (HTTP {status})")]
    Remote { status: u16, message: String },
    #[error("Not authorized; check the configured API token")]
    Unauthorized,
    #[error("Could not reach the API: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

/// Anything that can stop a validate-then-submit action.
#[derive(Debug, Error)]
pub enum HouseholdError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("Could not determine platform-specific config dir")]
    NoConfigDir,
}
