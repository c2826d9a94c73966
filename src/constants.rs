// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The manager name reported to the API server on writes
pub const MANAGER_NAME: &str = "registrar";

/// CRD polling configuration
pub mod crd {
    /// Default interval in seconds between readiness polls
    pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;
    /// Default budget in seconds for a definition to become established
    pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;
}
