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
use crate::utils::{RuleKind, fetch_agreed_data, negotiate, offered_rule, publish_offer};
use anyhow::{Result, ensure};
use async_trait::async_trait;
use dsc_client::model::resources::DEFAULT_ARTIFACT_VALUE;
use dsc_client::model::{ArtifactDesc, RuleDesc};
use log::info;

/// Negotiates an offer guarded by an unrestricted permission and reads the artifact through the agreement.
///
/// Passes when the consumer reads back exactly the value the provider stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAccess;

#[async_trait]
impl Scenario for AllowAccess {
    fn name(&self) -> &'static str {
        "allow-access"
    }

    fn description(&self) -> &'static str {
        "negotiated data equals the provider's artifact value"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<()> {
        let published = publish_offer(
            &ctx.provider_resources(),
            &ctx.contract(),
            &ArtifactDesc::default(),
            &[RuleDesc::default()],
        )
        .await?;

        let rule = offered_rule(ctx, &published.offer, published.artifact.as_str(), RuleKind::Permission).await?;
        let agreement = negotiate(
            ctx,
            published.offer.as_str(),
            published.artifact.as_str(),
            rule,
            false,
        )
        .await?;
        info!("Agreement {}", agreement);

        let data = fetch_agreed_data(ctx, &agreement).await?.expect_success("Failed to read agreed data")?;
        ensure!(
            data.text() == DEFAULT_ARTIFACT_VALUE,
            "Expected data '{}' but got '{}'",
            DEFAULT_ARTIFACT_VALUE,
            data.text()
        );
        Ok(())
    }
}
