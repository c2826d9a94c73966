// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API operations for custom resource definitions.

pub mod crd;

pub use crd::{
    crd_readiness, delete_crd, register_crd, register_crd_definition, validate_crd, CrdReadiness,
};
