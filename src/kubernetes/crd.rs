// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CustomResourceDefinition registration, readiness validation and deletion.

use crate::constants::MANAGER_NAME;
use crate::error::{RegistrarError, Result};
use crate::types::CustomResource;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client,
};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument, warn};

/// Outcome of a single readiness check against a definition's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrdReadiness {
    /// The definition is established and the type is usable
    Established,
    /// The requested names collided with an existing type
    NamesRejected(String),
    /// No terminal condition observed yet
    Pending,
}

/// Inspect a definition's status conditions.
///
/// `Established=True` takes precedence over a rejected names condition;
/// anything else, including a missing status, is pending.
pub fn crd_readiness(crd: &CustomResourceDefinition) -> CrdReadiness {
    let Some(conditions) = crd.status.as_ref().and_then(|s| s.conditions.as_ref()) else {
        return CrdReadiness::Pending;
    };

    if conditions
        .iter()
        .any(|c| c.type_ == "Established" && c.status == "True")
    {
        return CrdReadiness::Established;
    }

    if let Some(rejected) = conditions
        .iter()
        .find(|c| c.type_ == "NamesAccepted" && c.status == "False")
    {
        let reason = rejected
            .reason
            .clone()
            .unwrap_or_else(|| "names not accepted".to_string());
        return CrdReadiness::NamesRejected(reason);
    }

    CrdReadiness::Pending
}

/// Submit a custom resource definition built from the descriptor.
///
/// Returns as soon as the API server accepts the create; the definition is
/// established asynchronously. Use [`validate_crd`] to wait for that.
#[instrument(skip(client, resource), fields(crd = %resource.full_name()))]
pub async fn register_crd(client: &Client, resource: &CustomResource) -> Result<()> {
    let crds: Api<CustomResourceDefinition> = Api::all(client.clone());
    let definition = resource.to_definition();

    info!(
        "Registering custom resource definition {}",
        resource.full_name()
    );
    crds.create(&post_params(), &definition).await?;
    Ok(())
}

/// Submit a caller-built custom resource definition as-is, e.g. one derived
/// with `CustomResourceExt::crd()`.
#[instrument(skip(client, definition))]
pub async fn register_crd_definition(
    client: &Client,
    definition: &CustomResourceDefinition,
) -> Result<()> {
    let crds: Api<CustomResourceDefinition> = Api::all(client.clone());

    info!(
        "Registering custom resource definition {}",
        definition.metadata.name.as_deref().unwrap_or_default()
    );
    crds.create(&post_params(), definition).await?;
    Ok(())
}

fn post_params() -> PostParams {
    PostParams {
        field_manager: Some(MANAGER_NAME.to_string()),
        ..Default::default()
    }
}

/// Poll the definition's status until it is established, a name conflict is
/// reported, or the timeout elapses.
///
/// The status is checked immediately and then every `interval`, with the
/// last sleep capped at the remaining budget. Any fetch error aborts the
/// poll and is propagated.
#[instrument(skip(client, resource, timeout, interval), fields(crd = %resource.full_name()))]
pub async fn validate_crd(
    client: &Client,
    resource: &CustomResource,
    timeout: Duration,
    interval: Duration,
) -> Result<()> {
    let full_name = resource.full_name();
    let crds: Api<CustomResourceDefinition> = Api::all(client.clone());
    let deadline = Instant::now() + timeout;

    loop {
        let crd = crds.get(&full_name).await?;

        match crd_readiness(&crd) {
            CrdReadiness::Established => {
                info!("Custom resource definition {} is established", full_name);
                return Ok(());
            }
            CrdReadiness::NamesRejected(reason) => {
                warn!(
                    "Names for custom resource definition {} were rejected: {}",
                    full_name, reason
                );
                return Err(RegistrarError::NameConflict {
                    name: full_name,
                    reason,
                });
            }
            CrdReadiness::Pending => {
                let now = Instant::now();
                if now >= deadline {
                    return Err(RegistrarError::NotEstablished {
                        name: full_name,
                        timeout,
                    });
                }
                debug!(
                    "Custom resource definition {} not yet established, checking again in {:?}",
                    full_name, interval
                );
                sleep(interval.min(deadline - now)).await;
            }
        }
    }
}

/// Delete a definition by its fully-qualified name (`<plural>.<group>`).
///
/// Deletion is requested with the foreground cascade policy: the API server
/// removes dependents before the definition itself is gone. This call does
/// not wait for the cascade to finish.
#[instrument(skip(client))]
pub async fn delete_crd(client: &Client, full_name: &str) -> Result<()> {
    let crds: Api<CustomResourceDefinition> = Api::all(client.clone());

    info!("Deleting custom resource definition {}", full_name);
    crds.delete(full_name, &DeleteParams::foreground()).await?;
    Ok(())
}
