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
use crate::utils::publish_offer;
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use dsc_client::model::{ArtifactDesc, RuleDesc, SubscriptionDesc};
use log::info;

/// Subscribes to a published offer, once locally on the provider and once from the consumer through an IDS
/// subscription message.
///
/// Passes when the message is accepted and the provider lists more subscriptions than it did right after the local
/// one was created.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subscription;

#[async_trait]
impl Scenario for Subscription {
    fn name(&self) -> &'static str {
        "subscription"
    }

    fn description(&self) -> &'static str {
        "the provider registers subscriptions for its offers"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<()> {
        let published = publish_offer(
            &ctx.provider_resources(),
            &ctx.contract(),
            &ArtifactDesc::default(),
            &[RuleDesc::default()],
        )
        .await?;

        let provider = ctx.provider_subscriptions();
        let local = provider
            .create_subscription(
                &SubscriptionDesc::builder()
                    .title("local offer subscription")
                    .target(published.offer.as_str())
                    .location(ctx.provider_data_endpoint())
                    .subscriber(ctx.config().provider.base())
                    .build(),
            )
            .await
            .context("Failed to create subscription")?;
        info!("Created subscription {}", local);
        let before = provider.count_subscriptions().await.context("Failed to list subscriptions")?;

        let message = SubscriptionDesc::builder()
            .title("remote offer subscription")
            .target(published.offer.as_str())
            .location(ctx.consumer_data_endpoint())
            .subscriber(ctx.config().consumer.base())
            .build();
        let response = ctx
            .consumer_subscriptions()
            .subscribe_at(&ctx.provider_data_endpoint(), &message)
            .await?;
        ensure!(
            response.is_success(),
            "Subscription message was answered with {}: {}",
            response.status(),
            response.text()
        );

        let after = provider.count_subscriptions().await.context("Failed to list subscriptions")?;
        ensure!(
            after > before,
            "Provider lists {} subscriptions after the subscription message, {} before",
            after,
            before
        );
        Ok(())
    }
}
