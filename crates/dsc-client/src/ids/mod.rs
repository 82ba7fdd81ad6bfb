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

use crate::error::Result;
use crate::model::{EntityUrl, HalEntity, IdsCatalog, IdsContractOffer, IdsOfferedResource, IdsRule};
use crate::session::{ConnectorResponse, ConnectorSession, QueryParams};
use crate::util::{OneOrMany, normalize_to_collection};
use bon::Builder;
use log::info;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(test)]
mod tests;

const DESCRIPTION_PATH: &str = "/api/ids/description";
const CONTRACT_PATH: &str = "/api/ids/contract";

/// Parameters of a contract negotiation started by the consumer.
///
/// Absent parameters are omitted from the query. Resource and artifact ids are sent as repeated query keys; the rules
/// are always sent as a JSON array.
#[derive(Builder, Debug, Clone)]
pub struct ContractRequest {
    /// IDS data endpoint of the provider
    #[builder(into)]
    pub recipient: Option<String>,
    #[builder(into)]
    pub resource_ids: Option<OneOrMany<String>>,
    #[builder(into)]
    pub artifact_ids: Option<OneOrMany<String>>,
    /// Whether the consumer downloads the data right after the agreement
    pub download: Option<bool>,
    /// The accepted rules, each with `ids:target` set to the artifact it applies to
    #[builder(into)]
    pub rules: OneOrMany<IdsRule>,
}

impl ContractRequest {
    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new().with_opt("recipient", self.recipient.as_deref());
        if let Some(ids) = &self.resource_ids {
            params = params.with_all("resourceIds", normalize_to_collection(ids.clone()));
        }
        if let Some(ids) = &self.artifact_ids {
            params = params.with_all("artifactIds", normalize_to_collection(ids.clone()));
        }
        params.with_opt("download", self.download)
    }

    fn body(&self) -> Vec<IdsRule> {
        normalize_to_collection(self.rules.clone())
    }
}

/// Client for the IDS message endpoints a consumer uses to talk to a provider.
#[derive(Debug, Clone)]
pub struct IdsApi {
    session: ConnectorSession,
}

impl IdsApi {
    pub fn new(session: ConnectorSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &ConnectorSession {
        &self.session
    }

    /// Sends a description request and returns the raw response.
    pub async fn description_request_raw(
        &self,
        recipient: Option<&str>,
        element_id: Option<&str>,
    ) -> Result<ConnectorResponse> {
        let params = QueryParams::new()
            .with_opt("recipient", recipient)
            .with_opt("elementId", element_id);
        self.session.post_empty(DESCRIPTION_PATH, &params).await
    }

    /// Requests the self-description of `recipient`, or of one of its elements when `element_id` is given.
    pub async fn description_request(&self, recipient: Option<&str>, element_id: Option<&str>) -> Result<Value> {
        self.describe(recipient, element_id).await
    }

    /// Description request deserialized into one of the IDS document types.
    pub async fn describe<T: DeserializeOwned>(&self, recipient: Option<&str>, element_id: Option<&str>) -> Result<T> {
        self.description_request_raw(recipient, element_id)
            .await?
            .expect_success("Description request failed")?
            .json()
    }

    pub async fn describe_catalog(&self, recipient: &str, catalog: &str) -> Result<IdsCatalog> {
        self.describe(Some(recipient), Some(catalog)).await
    }

    pub async fn describe_resource(&self, recipient: &str, resource: &str) -> Result<IdsOfferedResource> {
        self.describe(Some(recipient), Some(resource)).await
    }

    pub async fn describe_contract(&self, recipient: &str, contract: &str) -> Result<IdsContractOffer> {
        self.describe(Some(recipient), Some(contract)).await
    }

    /// Sends a contract request and returns the raw response, leaving a rejection for the caller to inspect.
    pub async fn contract_request_raw(&self, request: &ContractRequest) -> Result<ConnectorResponse> {
        self.session
            .post(CONTRACT_PATH, &request.body(), &request.query())
            .await
    }

    /// Negotiates a contract and returns the resulting agreement.
    pub async fn contract_request(&self, request: &ContractRequest) -> Result<HalEntity> {
        let agreement: HalEntity = self
            .contract_request_raw(request)
            .await?
            .expect_success("Contract request failed")?
            .json()?;
        if let Ok(url) = agreement.self_link() {
            info!("Negotiated agreement {}", url);
        }
        Ok(agreement)
    }

    /// Negotiates a contract and returns the agreement's `_links.self.href`.
    pub async fn negotiate(&self, request: &ContractRequest) -> Result<EntityUrl> {
        self.contract_request(request).await?.self_link()
    }
}
