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
use crate::utils::{negotiate, publish_offer_in};
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use dsc_client::model::{ArtifactDesc, CatalogDesc, IdsOfferedResource, IdsRule, RuleDesc};
use dsc_client::templates::rules;
use log::info;

/// Maximum number of uses granted by the n-times-usage rule.
const MAX_USAGES: u32 = 5;

/// Publishes a local and a remote artifact in two offers of one catalog, each offer with its own usage rule, and
/// negotiates both in a single contract request with download enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleArtifacts;

/// The resource id, artifact id and targeted first permission of one described offer.
struct Negotiable {
    resource: String,
    artifact: String,
    rule: IdsRule,
}

impl MultipleArtifacts {
    async fn negotiable(&self, ctx: &ScenarioContext, resource: &IdsOfferedResource) -> Result<Negotiable> {
        let resource_id = resource.id()?;
        let artifact = resource.first_artifact_id()?.to_string();
        let contract_id = resource.contract_offer(0)?.id()?;
        let contract = ctx
            .consumer_ids()
            .describe_contract(&ctx.provider_data_endpoint(), contract_id)
            .await
            .with_context(|| format!("Failed to describe contract {}", contract_id))?;
        let rule = contract.permission(0)?.clone().with_target(artifact.as_str());
        Ok(Negotiable {
            resource: resource_id.to_string(),
            artifact,
            rule,
        })
    }
}

#[async_trait]
impl Scenario for MultipleArtifacts {
    fn name(&self) -> &'static str {
        "multiple-artifacts"
    }

    fn description(&self) -> &'static str {
        "one contract request covers a local and a remote artifact"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<()> {
        let provider = ctx.provider_resources();
        let catalog = provider
            .create_catalog(&CatalogDesc::default())
            .await
            .context("Failed to create catalog")?;
        let notification = RuleDesc::from_value(rules::usage_notification(&ctx.consumer_data_endpoint()));
        let count = RuleDesc::from_value(rules::n_times_usage(MAX_USAGES));
        publish_offer_in(&provider, &catalog, &ctx.contract(), &ArtifactDesc::default(), &[notification]).await?;
        publish_offer_in(
            &provider,
            &catalog,
            &ctx.contract(),
            &ArtifactDesc::remote(ctx.config().remote_data_url.as_str()),
            &[count],
        )
        .await?;
        info!("Created provider resources in catalog {}", catalog);

        let described = ctx
            .consumer_ids()
            .describe_catalog(&ctx.provider_data_endpoint(), catalog.as_str())
            .await
            .context("Failed to describe catalog")?;
        let first = self.negotiable(ctx, described.offered_resource(0)?).await?;
        let second = self.negotiable(ctx, described.offered_resource(1)?).await?;

        let agreement = negotiate(
            ctx,
            vec![first.resource, second.resource],
            vec![first.artifact, second.artifact],
            vec![first.rule, second.rule],
            true,
        )
        .await?;

        ensure!(
            agreement.is_under(ctx.config().consumer.base()),
            "Agreement {} is not a resource of the consumer",
            agreement
        );
        Ok(())
    }
}
