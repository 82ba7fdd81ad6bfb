//  Copyright (c) 2026 Metaform Systems, Inc
//
//  This program and the accompanying materials are made available under the
//  terms of the Apache License, Version 2.0 which is available at
//  https://www.apache.org/licenses/LICENSE-2.0
//
//  SPDX-License-Identifier: Apache-2.0
//
//  Contributors:
//       Metaform Systems, Inc. - initial API and implementation
//

//! Request bodies for the resource collections of the connector.
//!
//! Absent members are left out of the JSON so the connector applies its own defaults.

use crate::templates;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Artifact value used by the connector test fixtures.
pub const DEFAULT_ARTIFACT_VALUE: &str = "SOME LONG VALUE";

#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDesc {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDesc {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sovereign: Option<String>,
}

#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentationDesc {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Basic auth credentials the connector uses to fetch remote artifact data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub key: String,
    pub value: String,
}

/// An artifact holding either a local `value` or pointing at remote data through `accessUrl`.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDesc {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automated_download: Option<bool>,
}

impl ArtifactDesc {
    /// An artifact storing `value` inside the connector.
    pub fn with_value(value: impl Into<String>) -> Self {
        ArtifactDesc::builder().value(value).build()
    }

    /// An artifact whose data the connector fetches from `access_url`.
    pub fn remote(access_url: impl Into<String>) -> Self {
        ArtifactDesc::builder().access_url(access_url).build()
    }
}

impl Default for ArtifactDesc {
    /// Defaults to the fixture value `SOME LONG VALUE`.
    fn default() -> Self {
        ArtifactDesc::with_value(DEFAULT_ARTIFACT_VALUE)
    }
}

/// A contract offer template. `start` and `end` are ISO 8601 timestamps with offset.
#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractDesc {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// A rule; `value` is the JSON-LD text of the permission, prohibition or duty.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDesc {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(into)]
    pub value: String,
}

impl RuleDesc {
    pub fn from_value(value: impl Into<String>) -> Self {
        RuleDesc::builder().value(value).build()
    }
}

impl Default for RuleDesc {
    /// Defaults to an unrestricted `provide-access` permission.
    fn default() -> Self {
        RuleDesc::from_value(templates::rules::provide_access())
    }
}

#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDesc {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(into, default = "Camel")]
    pub deploy: String,
}

impl Default for RouteDesc {
    fn default() -> Self {
        RouteDesc::builder().build()
    }
}

#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDesc {
    #[builder(into, default = "http://localhost:8080")]
    pub location: String,
    #[builder(into, default = "GENERIC")]
    #[serde(rename = "type")]
    pub endpoint_type: String,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl Default for EndpointDesc {
    fn default() -> Self {
        EndpointDesc::builder().build()
    }
}

/// A subscription for updates of `target`, delivered to `location` on behalf of `subscriber`.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDesc {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(into)]
    pub target: String,
    #[builder(into)]
    pub location: String,
    #[builder(into)]
    pub subscriber: String,
    #[builder(default)]
    pub push_data: bool,
}
