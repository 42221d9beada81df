// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Layered client settings: defaults, config file, environment, then flags.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Household", "household"));

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const ENV_API_URL: &str = "HOUSEHOLD_API_URL";
pub const ENV_API_TOKEN: &str = "HOUSEHOLD_API_TOKEN";
pub const ENV_TIMEOUT: &str = "HOUSEHOLD_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join("config.json"))
}

/// Reads a config file; a missing file yields the defaults.
pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

impl Config {
    /// Applies environment values looked up through `env` on top of `self`.
    pub fn with_env<F>(mut self, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env(ENV_API_URL).filter(|s| !s.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(token) = env(ENV_API_TOKEN).filter(|s| !s.trim().is_empty()) {
            self.token = Some(token);
        }
        if let Some(t) = env(ENV_TIMEOUT) {
            self.timeout_secs = t.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT,
                value: t.clone(),
            })?;
        }
        Ok(self)
    }

    pub fn with_overrides(mut self, o: &Overrides) -> Self {
        if let Some(url) = &o.api_url {
            self.api_url = url.clone();
        }
        if let Some(token) = &o.token {
            self.token = Some(token.clone());
        }
        if let Some(t) = o.timeout_secs {
            self.timeout_secs = t;
        }
        self
    }

    /// Base URL without a trailing slash, ready for path joins.
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn masked_token(&self) -> String {
        let Some(t) = &self.token else {
            return "(none)".into();
        };
        let n = t.chars().count();
        if n <= 4 {
            return "****".into();
        }
        let tail: String = t.chars().skip(n - 4).collect();
        format!("****{}", tail)
    }
}

/// Resolves the effective config from the platform config file, the process
/// environment and `overrides`.
pub fn resolve(overrides: &Overrides) -> Result<Config, ConfigError> {
    let file = load_file(&config_path()?)?;
    let cfg = file
        .with_env(|k| std::env::var(k).ok())?
        .with_overrides(overrides);
    tracing::debug!(api_url = %cfg.api_url, timeout = cfg.timeout_secs, "config resolved");
    Ok(cfg)
}
