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

//! IDS information model documents returned by description requests.
//!
//! Only the members needed to walk from a catalog down to rules and artifacts are typed. Everything else is kept in
//! the `extra` maps so a document, or a rule taken from it, can be sent back to the connector unchanged.

use crate::error::{ClientError, Result};
use crate::util::one_or_many;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TARGET_KEY: &str = "ids:target";

/// `ids:ResourceCatalog`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdsCatalog {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "ids:offeredResource", default, deserialize_with = "one_or_many")]
    pub offered_resources: Vec<IdsOfferedResource>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdsCatalog {
    pub fn offered_resource(&self, index: usize) -> Result<&IdsOfferedResource> {
        self.offered_resources
            .get(index)
            .ok_or_else(|| ClientError::malformed(&format!("ids:offeredResource[{}]", index)))
    }
}

/// `ids:Resource`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdsOfferedResource {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "ids:contractOffer", default, deserialize_with = "one_or_many")]
    pub contract_offers: Vec<IdsContractOffer>,
    #[serde(rename = "ids:representation", default, deserialize_with = "one_or_many")]
    pub representations: Vec<IdsRepresentation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdsOfferedResource {
    pub fn id(&self) -> Result<&str> {
        self.id.as_deref().ok_or_else(|| ClientError::malformed("ids:offeredResource.@id"))
    }

    pub fn contract_offer(&self, index: usize) -> Result<&IdsContractOffer> {
        self.contract_offers
            .get(index)
            .ok_or_else(|| ClientError::malformed(&format!("ids:contractOffer[{}]", index)))
    }

    pub fn representation(&self, index: usize) -> Result<&IdsRepresentation> {
        self.representations
            .get(index)
            .ok_or_else(|| ClientError::malformed(&format!("ids:representation[{}]", index)))
    }

    /// `ids:representation[0].ids:instance[0].@id`
    pub fn first_artifact_id(&self) -> Result<&str> {
        self.representation(0)?.instance(0)?.id()
    }
}

/// `ids:ContractOffer`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdsContractOffer {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "ids:permission", default, deserialize_with = "one_or_many")]
    pub permissions: Vec<IdsRule>,
    #[serde(rename = "ids:prohibition", default, deserialize_with = "one_or_many")]
    pub prohibitions: Vec<IdsRule>,
    #[serde(rename = "ids:obligation", default, deserialize_with = "one_or_many")]
    pub obligations: Vec<IdsRule>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdsContractOffer {
    pub fn id(&self) -> Result<&str> {
        self.id.as_deref().ok_or_else(|| ClientError::malformed("ids:contractOffer.@id"))
    }

    pub fn permission(&self, index: usize) -> Result<&IdsRule> {
        self.permissions
            .get(index)
            .ok_or_else(|| ClientError::malformed(&format!("ids:permission[{}]", index)))
    }

    pub fn prohibition(&self, index: usize) -> Result<&IdsRule> {
        self.prohibitions
            .get(index)
            .ok_or_else(|| ClientError::malformed(&format!("ids:prohibition[{}]", index)))
    }
}

/// `ids:Representation`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdsRepresentation {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "ids:instance", default, deserialize_with = "one_or_many")]
    pub instances: Vec<IdsArtifact>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdsRepresentation {
    pub fn instance(&self, index: usize) -> Result<&IdsArtifact> {
        self.instances
            .get(index)
            .ok_or_else(|| ClientError::malformed(&format!("ids:instance[{}]", index)))
    }
}

/// `ids:Artifact`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdsArtifact {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdsArtifact {
    pub fn id(&self) -> Result<&str> {
        self.id.as_deref().ok_or_else(|| ClientError::malformed("ids:instance.@id"))
    }
}

/// A usage control rule (`ids:Permission`, `ids:Prohibition` or `ids:Duty`) as a JSON-LD object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdsRule(Map<String, Value>);

impl IdsRule {
    pub fn new(object: Map<String, Value>) -> Self {
        IdsRule(object)
    }

    /// Parses a rule from its JSON-LD text.
    pub fn from_json(value: &str) -> Result<Self> {
        serde_json::from_str(value).map_err(|e| ClientError::MalformedResponse(format!("Invalid rule: {}", e)))
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("@id").and_then(Value::as_str)
    }

    pub fn rule_type(&self) -> Option<&str> {
        self.0.get("@type").and_then(Value::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        match self.0.get(TARGET_KEY)? {
            Value::String(target) => Some(target),
            Value::Object(object) => object.get("@id").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Sets `ids:target` to the artifact the rule is requested for.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.0.insert(TARGET_KEY.to_string(), Value::String(target.into()));
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.set_target(target);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
