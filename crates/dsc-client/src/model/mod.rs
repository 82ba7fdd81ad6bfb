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

//! Typed request and response schemas of the connector API.

pub mod ids;
pub mod resources;

pub use ids::{IdsArtifact, IdsCatalog, IdsContractOffer, IdsOfferedResource, IdsRepresentation, IdsRule};
pub use resources::{
    ArtifactDesc, CatalogDesc, ContractDesc, EndpointDesc, OfferDesc, RepresentationDesc, RouteDesc, RuleDesc,
    SubscriptionDesc,
};

use crate::error::{ClientError, Result};
use crate::util::uuid_from_uri;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Identifier of a connector entity: the absolute URL the connector returned for it, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityUrl(String);

impl EntityUrl {
    pub fn parse(value: &str) -> Result<Self> {
        Url::parse(value)
            .map(|_| EntityUrl(value.to_string()))
            .map_err(|e| ClientError::InvalidIdentifier(format!("'{}' is not an absolute URL: {}", value, e)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the URL of a relation or sub-resource, e.g. `{offer}/representations` or `{artifact}/data`.
    pub fn join(&self, relation: &str) -> String {
        format!("{}/{}", self.as_str().trim_end_matches('/'), relation.trim_start_matches('/'))
    }

    /// The UUID part of this identifier.
    pub fn uuid(&self) -> Result<String> {
        uuid_from_uri(self.as_str())
    }

    /// Returns true if this identifier lives under the given base URL.
    pub fn is_under(&self, base_url: &str) -> bool {
        self.as_str()
            .strip_prefix(base_url.trim_end_matches('/'))
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

impl fmt::Display for EntityUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for EntityUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for EntityUrl {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        EntityUrl::parse(s)
    }
}

impl TryFrom<String> for EntityUrl {
    type Error = ClientError;

    fn try_from(value: String) -> Result<Self> {
        EntityUrl::parse(&value)
    }
}

impl From<EntityUrl> for String {
    fn from(value: EntityUrl) -> Self {
        value.0
    }
}

/// A HAL link object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Href {
    pub href: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,
}

/// The `_links` member of a HAL entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Href>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Any connector entity rendered as HAL: the entity's own fields plus `_links`.
///
/// Agreements returned by a contract negotiation and the items of collection listings have this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HalEntity {
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl HalEntity {
    /// The `_links.self.href` URL of this entity.
    pub fn self_link(&self) -> Result<EntityUrl> {
        let href = self
            .links
            .self_link
            .as_ref()
            .ok_or_else(|| ClientError::malformed("_links.self.href"))?;
        EntityUrl::parse(&href.href)
    }

    /// Returns a field of the entity as a string, if present.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// Pagination metadata of a collection listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub size: u64,
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub number: u64,
}

/// A paginated collection listing such as `GET /api/agreements`.
///
/// Items are found under `_embedded.{collection}`; the connector omits `_embedded` for empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage {
    #[serde(rename = "_embedded", default)]
    pub embedded: HashMap<String, Vec<HalEntity>>,
    #[serde(default)]
    pub page: Option<PageInfo>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl CollectionPage {
    /// Total number of elements across all pages. Falls back to the embedded items when no page metadata is sent.
    pub fn total_elements(&self) -> u64 {
        match self.page {
            Some(page) => page.total_elements,
            None => self.embedded.values().map(|items| items.len() as u64).sum(),
        }
    }

    pub fn items(&self, collection: &str) -> &[HalEntity] {
        self.embedded.get(collection).map(Vec::as_slice).unwrap_or_default()
    }

    /// The self link of the first item of the named collection.
    pub fn first_self_link(&self, collection: &str) -> Result<EntityUrl> {
        self.items(collection)
            .first()
            .ok_or_else(|| ClientError::malformed(&format!("_embedded.{}[0]", collection)))?
            .self_link()
    }
}
