// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("name conflict for custom resource definition {name}: {reason}")]
    NameConflict { name: String, reason: String },

    #[error("custom resource definition {name} did not become ready within {timeout:?}")]
    NotEstablished { name: String, timeout: Duration },

    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
