// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Descriptor for a custom resource type to be registered with the cluster.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, CustomResourceDefinitionNames, CustomResourceDefinitionSpec,
    CustomResourceDefinitionVersion, CustomResourceValidation, JSONSchemaProps,
};
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};

/// Whether instances of the resource live in a namespace or cluster-wide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    #[default]
    Namespaced,
    Cluster,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Namespaced => "Namespaced",
            Scope::Cluster => "Cluster",
        }
    }
}

/// Describes a custom resource type to register with the API server.
///
/// The descriptor is supplied by the caller, typically deserialized from a
/// manifest, and is never mutated after construction. Once submitted, the
/// API server owns the definition and its status conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResource {
    /// Singular name of the resource
    pub name: String,
    /// Short aliases for the resource, e.g. `po` for pods. Must be lowercase;
    /// the API server rejects anything else.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub short_names: Vec<String>,
    /// Plural name, also the first half of the definition's identity
    pub plural: String,
    /// API group the resource belongs to
    pub group: String,
    /// Version to serve and store
    pub version: String,
    #[serde(default)]
    pub scope: Scope,
    /// Serialized kind of the resource
    pub kind: String,
}

impl CustomResource {
    /// The fully-qualified identity of the definition, `<plural>.<group>`.
    /// This is the metadata name on create and the lookup key for
    /// validation and deletion.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.plural, self.group)
    }

    /// Build the `CustomResourceDefinition` this descriptor registers.
    ///
    /// The single version is served and stored, with the minimal structural
    /// schema accepting any object. Name rules are left to the API server.
    pub fn to_definition(&self) -> CustomResourceDefinition {
        CustomResourceDefinition {
            metadata: ObjectMeta {
                name: Some(self.full_name()),
                ..Default::default()
            },
            spec: CustomResourceDefinitionSpec {
                group: self.group.clone(),
                names: CustomResourceDefinitionNames {
                    kind: self.kind.clone(),
                    plural: self.plural.clone(),
                    singular: Some(self.name.clone()),
                    short_names: if self.short_names.is_empty() {
                        None
                    } else {
                        Some(self.short_names.clone())
                    },
                    ..Default::default()
                },
                scope: self.scope.as_str().to_string(),
                versions: vec![CustomResourceDefinitionVersion {
                    name: self.version.clone(),
                    served: true,
                    storage: true,
                    schema: Some(CustomResourceValidation {
                        open_api_v3_schema: Some(JSONSchemaProps {
                            type_: Some("object".to_string()),
                            x_kubernetes_preserve_unknown_fields: Some(true),
                            ..Default::default()
                        }),
                    }),
                    ..Default::default()
                }],
                ..Default::default()
            },
            status: None,
        }
    }
}
