// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Descriptor types for custom resources.

pub mod custom_resource;

pub use custom_resource::{CustomResource, Scope};
