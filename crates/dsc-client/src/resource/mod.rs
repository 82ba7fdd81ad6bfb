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
use crate::model::{
    ArtifactDesc, CatalogDesc, CollectionPage, ContractDesc, EndpointDesc, EntityUrl, OfferDesc, RepresentationDesc,
    RouteDesc, RuleDesc,
};
use crate::session::{ConnectorResponse, ConnectorSession, QueryParams};
use crate::util::{OneOrMany, normalize_to_collection};
use log::{debug, warn};
use reqwest::StatusCode;
use serde::Serialize;

#[cfg(test)]
mod tests;

/// Collections of the connector's resource API.
pub mod collections {
    pub const CATALOGS: &str = "catalogs";
    pub const OFFERS: &str = "offers";
    pub const REPRESENTATIONS: &str = "representations";
    pub const ARTIFACTS: &str = "artifacts";
    pub const CONTRACTS: &str = "contracts";
    pub const RULES: &str = "rules";
    pub const ROUTES: &str = "routes";
    pub const ENDPOINTS: &str = "endpoints";
    pub const AGREEMENTS: &str = "agreements";
    pub const REQUESTS: &str = "requests";
    pub const SUBSCRIPTIONS: &str = "subscriptions";
}

use collections::*;

/// Which end of a route an endpoint is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEnd {
    Start,
    End,
}

impl RouteEnd {
    fn path(self) -> &'static str {
        match self {
            RouteEnd::Start => "endpoint/start",
            RouteEnd::End => "endpoint/end",
        }
    }
}

/// Client for the resource CRUD endpoints (`/api/{collection}`) and their relations.
///
/// Entities are created one by one and then linked. A create returns the new entity's URL taken from the `Location`
/// header; that URL is the only handle to the entity from then on.
#[derive(Debug, Clone)]
pub struct ResourceApi {
    session: ConnectorSession,
}

impl ResourceApi {
    pub fn new(session: ConnectorSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &ConnectorSession {
        &self.session
    }

    pub async fn create_catalog(&self, desc: &CatalogDesc) -> Result<EntityUrl> {
        self.create(CATALOGS, desc).await
    }

    pub async fn create_offered_resource(&self, desc: &OfferDesc) -> Result<EntityUrl> {
        self.create(OFFERS, desc).await
    }

    pub async fn create_representation(&self, desc: &RepresentationDesc) -> Result<EntityUrl> {
        self.create(REPRESENTATIONS, desc).await
    }

    pub async fn create_artifact(&self, desc: &ArtifactDesc) -> Result<EntityUrl> {
        self.create(ARTIFACTS, desc).await
    }

    pub async fn create_contract(&self, desc: &ContractDesc) -> Result<EntityUrl> {
        self.create(CONTRACTS, desc).await
    }

    pub async fn create_rule(&self, desc: &RuleDesc) -> Result<EntityUrl> {
        self.create(RULES, desc).await
    }

    pub async fn create_route(&self, desc: &RouteDesc) -> Result<EntityUrl> {
        self.create(ROUTES, desc).await
    }

    pub async fn create_endpoint(&self, desc: &EndpointDesc) -> Result<EntityUrl> {
        self.create(ENDPOINTS, desc).await
    }

    /// POSTs `body` to `/api/{collection}` and returns the `Location` of the created entity.
    pub async fn create<B: Serialize + ?Sized>(&self, collection: &str, body: &B) -> Result<EntityUrl> {
        let response = self
            .session
            .post(&format!("/api/{}", collection), body, &QueryParams::new())
            .await?;
        let location = response.location()?;
        debug!("Created {} entity {}", collection, location);
        Ok(location)
    }

    pub async fn add_resource_to_catalog(
        &self,
        catalog: &EntityUrl,
        resources: impl Into<OneOrMany<EntityUrl>>,
    ) -> Result<ConnectorResponse> {
        self.link(catalog, OFFERS, resources.into()).await
    }

    pub async fn add_catalog_to_resource(
        &self,
        resource: &EntityUrl,
        catalogs: impl Into<OneOrMany<EntityUrl>>,
    ) -> Result<ConnectorResponse> {
        self.link(resource, CATALOGS, catalogs.into()).await
    }

    pub async fn add_representation_to_resource(
        &self,
        resource: &EntityUrl,
        representations: impl Into<OneOrMany<EntityUrl>>,
    ) -> Result<ConnectorResponse> {
        self.link(resource, REPRESENTATIONS, representations.into()).await
    }

    pub async fn add_artifact_to_representation(
        &self,
        representation: &EntityUrl,
        artifacts: impl Into<OneOrMany<EntityUrl>>,
    ) -> Result<ConnectorResponse> {
        self.link(representation, ARTIFACTS, artifacts.into()).await
    }

    pub async fn add_contract_to_resource(
        &self,
        resource: &EntityUrl,
        contracts: impl Into<OneOrMany<EntityUrl>>,
    ) -> Result<ConnectorResponse> {
        self.link(resource, CONTRACTS, contracts.into()).await
    }

    pub async fn add_rule_to_contract(
        &self,
        contract: &EntityUrl,
        rules: impl Into<OneOrMany<EntityUrl>>,
    ) -> Result<ConnectorResponse> {
        self.link(contract, RULES, rules.into()).await
    }

    /// POSTs the children as a JSON array to `{parent}/{relation}`.
    pub async fn link(
        &self,
        parent: &EntityUrl,
        relation: &str,
        children: OneOrMany<EntityUrl>,
    ) -> Result<ConnectorResponse> {
        let children = normalize_to_collection(children);
        let response = self
            .session
            .post(&parent.join(relation), &children, &QueryParams::new())
            .await?;
        if !response.is_success() {
            warn!("Linking {} {} to {} returned {}", children.len(), relation, parent, response.status());
        }
        Ok(response)
    }

    pub async fn add_start_endpoint_to_route(&self, route: &EntityUrl, endpoint: &EntityUrl) -> Result<ConnectorResponse> {
        self.attach_endpoint(route, endpoint, RouteEnd::Start).await
    }

    pub async fn add_end_endpoint_to_route(&self, route: &EntityUrl, endpoint: &EntityUrl) -> Result<ConnectorResponse> {
        self.attach_endpoint(route, endpoint, RouteEnd::End).await
    }

    /// PUTs the endpoint's UUID as a JSON string to `{route}/endpoint/{start|end}`.
    pub async fn attach_endpoint(
        &self,
        route: &EntityUrl,
        endpoint: &EntityUrl,
        end: RouteEnd,
    ) -> Result<ConnectorResponse> {
        let uuid = endpoint.uuid()?;
        self.session.put(&route.join(end.path()), &uuid).await
    }

    /// Replaces an artifact's description. Returns true only when the connector answered 204.
    pub async fn update_artifact(&self, artifact: &EntityUrl, desc: &ArtifactDesc) -> Result<bool> {
        let response = self.session.put(artifact.as_str(), desc).await?;
        Ok(response.status() == StatusCode::NO_CONTENT)
    }

    pub async fn get_data(&self, artifact: &EntityUrl) -> Result<ConnectorResponse> {
        self.session.get(&artifact.join("data"), &QueryParams::new()).await
    }

    /// Fetches artifact data through the given route.
    pub async fn get_data_with_route(&self, artifact: &EntityUrl, route: &EntityUrl) -> Result<ConnectorResponse> {
        let params = QueryParams::new().with("routeIds", route);
        self.session.get(&artifact.join("data"), &params).await
    }

    /// Fetches artifact data, making the consumer download it again from the provider.
    pub async fn get_data_force_download(&self, artifact: &EntityUrl) -> Result<ConnectorResponse> {
        let params = QueryParams::new().with("download", true);
        self.session.get(&artifact.join("data"), &params).await
    }

    pub async fn set_data(&self, artifact: &EntityUrl, data: impl Into<Vec<u8>>) -> Result<ConnectorResponse> {
        self.session.put_body(&artifact.join("data"), data).await
    }

    pub async fn get_artifacts_for_agreement(&self, agreement: &EntityUrl) -> Result<CollectionPage> {
        self.session
            .get(&agreement.join(ARTIFACTS), &QueryParams::new())
            .await?
            .expect_success("Failed to list agreement artifacts")?
            .json()
    }

    /// The first artifact of the first agreement known to this connector.
    pub async fn get_requested_artifact(&self) -> Result<EntityUrl> {
        let agreements = self.list(AGREEMENTS).await?;
        let agreement = agreements.first_self_link(AGREEMENTS)?;
        self.get_artifacts_for_agreement(&agreement)
            .await?
            .first_self_link(ARTIFACTS)
    }

    /// Lists the first page of `/api/{collection}`.
    pub async fn list(&self, collection: &str) -> Result<CollectionPage> {
        self.session
            .get(&format!("/api/{}", collection), &QueryParams::new())
            .await?
            .expect_success(&format!("Failed to list {}", collection))?
            .json()
    }

    /// Total number of entities in `/api/{collection}` as reported by `page.totalElements`.
    pub async fn count(&self, collection: &str) -> Result<u64> {
        Ok(self.list(collection).await?.total_elements())
    }
}
