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

use crate::context::ScenarioContext;
use crate::scenarios::Scenario;
use crate::utils::{CollectionCounts, RuleKind, check_linked, negotiate, offered_rule, publish_offer};
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use dsc_client::model::{ArtifactDesc, OfferDesc, RuleDesc};
use dsc_client::resource::collections::{AGREEMENTS, ARTIFACTS, REPRESENTATIONS, REQUESTS};
use log::info;

const CONSUMER_COLLECTIONS: &[&str] = &[REQUESTS, REPRESENTATIONS, ARTIFACTS, AGREEMENTS];

/// Negotiates two offers that share one representation and artifact.
///
/// After the second negotiation the consumer holds one more requested resource, but no new representation or
/// artifact, and one more agreement exists on each side of the exchange.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueRemoteData;

impl UniqueRemoteData {
    /// Agreements known to both sides. A connector talking to itself stores both sides in one place.
    async fn agreements(&self, ctx: &ScenarioContext, consumer: &CollectionCounts) -> Result<u64> {
        if ctx.is_single_connector() {
            return Ok(consumer.get(AGREEMENTS));
        }
        let provider = ctx
            .provider_resources()
            .count(AGREEMENTS)
            .await
            .context("Failed to count provider agreements")?;
        Ok(provider + consumer.get(AGREEMENTS))
    }
}

#[async_trait]
impl Scenario for UniqueRemoteData {
    fn name(&self) -> &'static str {
        "unique-remote-data"
    }

    fn description(&self) -> &'static str {
        "shared representations and artifacts are stored once by the consumer"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<()> {
        let provider = ctx.provider_resources();
        let consumer = ctx.consumer_resources();
        let published = publish_offer(&provider, &ctx.contract(), &ArtifactDesc::default(), &[RuleDesc::default()]).await?;

        let second_offer = provider
            .create_offered_resource(&OfferDesc::default())
            .await
            .context("Failed to create second offer")?;
        check_linked(
            provider
                .add_representation_to_resource(&second_offer, &published.representation)
                .await?,
            "shared representation to second offer",
        )?;
        check_linked(
            provider.add_contract_to_resource(&second_offer, &published.contract).await?,
            "shared contract to second offer",
        )?;

        let artifact = published.artifact.as_str();
        let rule = offered_rule(ctx, &published.offer, artifact, RuleKind::Permission).await?;
        negotiate(ctx, published.offer.as_str(), artifact, rule, false).await?;

        let before = CollectionCounts::take(&consumer, CONSUMER_COLLECTIONS).await?;
        let agreements_before = self.agreements(ctx, &before).await?;

        let rule = offered_rule(ctx, &second_offer, artifact, RuleKind::Permission).await?;
        negotiate(ctx, second_offer.as_str(), artifact, rule, false).await?;

        let after = CollectionCounts::take(&consumer, CONSUMER_COLLECTIONS).await?;
        let agreements_after = self.agreements(ctx, &after).await?;
        info!("Consumer counts before {:?}, after {:?}", before, after);

        ensure!(
            before.growth(&after, REQUESTS) == 1,
            "Wrong number of requested resources: {} before, {} after",
            before.get(REQUESTS),
            after.get(REQUESTS)
        );
        ensure!(
            before.growth(&after, REPRESENTATIONS) == 0,
            "Wrong number of representations: {} before, {} after",
            before.get(REPRESENTATIONS),
            after.get(REPRESENTATIONS)
        );
        ensure!(
            before.growth(&after, ARTIFACTS) == 0,
            "Wrong number of artifacts: {} before, {} after",
            before.get(ARTIFACTS),
            after.get(ARTIFACTS)
        );
        ensure!(
            agreements_after == agreements_before + 2,
            "Wrong number of agreements: {} before, {} after",
            agreements_before,
            agreements_after
        );
        Ok(())
    }
}
