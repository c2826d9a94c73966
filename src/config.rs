// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::crd::{DEFAULT_POLL_INTERVAL_SECS, DEFAULT_POLL_TIMEOUT_SECS};
use crate::error::{RegistrarError, Result};
use std::env;
use std::time::Duration;

/// Polling configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Interval between readiness polls
    pub poll_interval: Duration,
    /// Budget for a definition to become established
    pub poll_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            poll_timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults in [`crate::constants::crd`] for unset variables.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            poll_interval: secs_from_env("REGISTRAR_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)?,
            poll_timeout: secs_from_env("REGISTRAR_POLL_TIMEOUT_SECS", DEFAULT_POLL_TIMEOUT_SECS)?,
        })
    }
}

fn secs_from_env(var: &str, default: u64) -> Result<Duration> {
    let secs = match env::var(var) {
        Ok(value) => value.parse().map_err(|_| {
            RegistrarError::ConfigError(format!("{} must be a number of seconds, got '{}'", var, value))
        })?,
        Err(_) => default,
    };
    Ok(Duration::from_secs(secs))
}
