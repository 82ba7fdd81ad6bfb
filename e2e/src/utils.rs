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

//! Building blocks shared by the scenarios: publishing an offer on the provider, negotiating it from the consumer
//! and taking collection counts.

use crate::context::ScenarioContext;
use anyhow::{Context, Result};
use dsc_client::model::{ArtifactDesc, CatalogDesc, ContractDesc, IdsContractOffer, IdsRule, OfferDesc, RuleDesc};
use dsc_client::resource::collections::ARTIFACTS;
use dsc_client::{ConnectorResponse, ContractRequest, EntityUrl, OneOrMany, ResourceApi};
use log::info;
use std::collections::BTreeMap;

/// Identifiers of an offer published on the provider together with everything linked to it.
#[derive(Debug, Clone)]
pub struct PublishedOffer {
    pub catalog: EntityUrl,
    pub offer: EntityUrl,
    pub representation: EntityUrl,
    pub artifact: EntityUrl,
    pub contract: EntityUrl,
    pub rules: Vec<EntityUrl>,
}

/// Fails unless a link call was accepted.
pub fn check_linked(response: ConnectorResponse, relation: &str) -> Result<()> {
    response
        .expect_success(&format!("Failed to link {}", relation))
        .map(|_| ())
        .map_err(Into::into)
}

/// Creates a new catalog on the provider and publishes one offer in it.
pub async fn publish_offer(
    resources: &ResourceApi,
    contract: &ContractDesc,
    artifact: &ArtifactDesc,
    rules: &[RuleDesc],
) -> Result<PublishedOffer> {
    let catalog = resources
        .create_catalog(&CatalogDesc::default())
        .await
        .context("Failed to create catalog")?;
    publish_offer_in(resources, &catalog, contract, artifact, rules).await
}

/// Publishes an offer in an existing catalog.
///
/// Entities are created first and then linked in the order the connector accepts: catalog to offer, offer to
/// representation, representation to artifact, offer to contract, contract to rules.
pub async fn publish_offer_in(
    resources: &ResourceApi,
    catalog: &EntityUrl,
    contract: &ContractDesc,
    artifact: &ArtifactDesc,
    rules: &[RuleDesc],
) -> Result<PublishedOffer> {
    let offer = resources
        .create_offered_resource(&OfferDesc::default())
        .await
        .context("Failed to create offer")?;
    let representation = resources
        .create_representation(&Default::default())
        .await
        .context("Failed to create representation")?;
    let artifact = resources
        .create_artifact(artifact)
        .await
        .context("Failed to create artifact")?;
    let contract = resources
        .create_contract(contract)
        .await
        .context("Failed to create contract")?;
    let mut rule_urls = Vec::with_capacity(rules.len());
    for rule in rules {
        rule_urls.push(resources.create_rule(rule).await.context("Failed to create rule")?);
    }

    check_linked(resources.add_resource_to_catalog(catalog, &offer).await?, "offer to catalog")?;
    check_linked(
        resources.add_representation_to_resource(&offer, &representation).await?,
        "representation to offer",
    )?;
    check_linked(
        resources.add_artifact_to_representation(&representation, &artifact).await?,
        "artifact to representation",
    )?;
    check_linked(resources.add_contract_to_resource(&offer, &contract).await?, "contract to offer")?;
    check_linked(
        resources.add_rule_to_contract(&contract, rule_urls.clone()).await?,
        "rules to contract",
    )?;

    info!("Published offer {} with artifact {}", offer, artifact);

    Ok(PublishedOffer {
        catalog: catalog.clone(),
        offer,
        representation,
        artifact,
        contract,
        rules: rule_urls,
    })
}

/// Kind of rule looked up in a described contract offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Permission,
    Prohibition,
}

impl RuleKind {
    fn pick(self, offer: &IdsContractOffer, index: usize) -> dsc_client::error::Result<&IdsRule> {
        match self {
            RuleKind::Permission => offer.permission(index),
            RuleKind::Prohibition => offer.prohibition(index),
        }
    }
}

/// Describes `offer` at the provider through the consumer and returns the first rule of its first contract offer,
/// targeted at `artifact`.
pub async fn offered_rule(
    ctx: &ScenarioContext,
    offer: &EntityUrl,
    artifact: &str,
    kind: RuleKind,
) -> Result<IdsRule> {
    let resource = ctx
        .consumer_ids()
        .describe_resource(&ctx.provider_data_endpoint(), offer.as_str())
        .await
        .with_context(|| format!("Failed to describe offer {}", offer))?;
    let rule = kind.pick(resource.contract_offer(0)?, 0)?;
    Ok(rule.clone().with_target(artifact))
}

/// Negotiates the given rules for one offer and artifact and returns the agreement URL.
pub async fn negotiate(
    ctx: &ScenarioContext,
    resources: impl Into<OneOrMany<String>>,
    artifacts: impl Into<OneOrMany<String>>,
    rules: impl Into<OneOrMany<IdsRule>>,
    download: bool,
) -> Result<EntityUrl> {
    let request = contract_request(ctx, resources, artifacts, rules, download);
    ctx.consumer_ids()
        .negotiate(&request)
        .await
        .context("Contract negotiation failed")
}

/// Contract request addressed to the provider.
pub fn contract_request(
    ctx: &ScenarioContext,
    resources: impl Into<OneOrMany<String>>,
    artifacts: impl Into<OneOrMany<String>>,
    rules: impl Into<OneOrMany<IdsRule>>,
    download: bool,
) -> ContractRequest {
    ContractRequest::builder()
        .recipient(ctx.provider_data_endpoint())
        .resource_ids(resources)
        .artifact_ids(artifacts)
        .download(download)
        .rules(rules)
        .build()
}

/// Reads the data of the first artifact the consumer received under `agreement`.
pub async fn fetch_agreed_data(ctx: &ScenarioContext, agreement: &EntityUrl) -> Result<ConnectorResponse> {
    let consumer = ctx.consumer_resources();
    let artifact = consumer
        .get_artifacts_for_agreement(agreement)
        .await?
        .first_self_link(ARTIFACTS)
        .with_context(|| format!("No artifact under agreement {}", agreement))?;
    consumer.get_data(&artifact).await.map_err(Into::into)
}

/// Total element counts of several collections of one connector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionCounts(BTreeMap<String, u64>);

impl CollectionCounts {
    pub async fn take(resources: &ResourceApi, collections: &[&str]) -> Result<Self> {
        let mut counts = BTreeMap::new();
        for collection in collections {
            let count = resources
                .count(collection)
                .await
                .with_context(|| format!("Failed to count {}", collection))?;
            counts.insert(collection.to_string(), count);
        }
        Ok(CollectionCounts(counts))
    }

    pub fn get(&self, collection: &str) -> u64 {
        self.0.get(collection).copied().unwrap_or_default()
    }

    /// Growth of `collection` from `self` to `after`; negative when entities were removed.
    pub fn growth(&self, after: &CollectionCounts, collection: &str) -> i64 {
        after.get(collection) as i64 - self.get(collection) as i64
    }
}
