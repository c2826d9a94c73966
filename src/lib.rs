// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lifecycle management for Kubernetes custom resource definitions: submit
//! a definition, wait for the API server to establish it, and delete it
//! with foreground cascading.
//!
//! ```no_run
//! use registrar::config::Config;
//! use registrar::kubernetes::{delete_crd, register_crd, validate_crd};
//! use registrar::types::{CustomResource, Scope};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = kube::Client::try_default().await?;
//! let config = Config::from_env()?;
//!
//! let resource = CustomResource {
//!     name: "widget".to_string(),
//!     short_names: vec!["wd".to_string()],
//!     plural: "widgets".to_string(),
//!     group: "example.com".to_string(),
//!     version: "v1".to_string(),
//!     scope: Scope::Namespaced,
//!     kind: "Widget".to_string(),
//! };
//!
//! register_crd(&client, &resource).await?;
//! validate_crd(&client, &resource, config.poll_timeout, config.poll_interval).await?;
//! delete_crd(&client, &resource.full_name()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{RegistrarError, Result};
