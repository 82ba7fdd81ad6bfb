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
use crate::utils::{PublishedOffer, RuleKind, fetch_agreed_data, negotiate, offered_rule, publish_offer};
use anyhow::{Result, bail};
use async_trait::async_trait;
use dsc_client::ClientError;
use dsc_client::model::resources::DEFAULT_ARTIFACT_VALUE;
use dsc_client::model::{ArtifactDesc, RuleDesc};
use dsc_client::templates::rules;
use log::{info, warn};

/// Same workflow as `allow-access`, but the offer carries a prohibition.
///
/// Passes exactly when the consumer does not get the stored value back. A refused negotiation or data request counts
/// as not getting it; a transport failure still fails the scenario.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProhibitAccess;

impl ProhibitAccess {
    async fn pull(&self, ctx: &ScenarioContext, published: &PublishedOffer) -> Result<Option<String>> {
        let offer = published.offer.as_str();
        let artifact = published.artifact.as_str();
        let rule = offered_rule(ctx, &published.offer, artifact, RuleKind::Prohibition).await?;
        let agreement = match negotiate(ctx, offer, artifact, rule, false).await {
            Ok(agreement) => agreement,
            Err(e) if is_refusal(&e) => {
                info!("Negotiation refused: {:#}", e);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        match fetch_agreed_data(ctx, &agreement).await {
            Ok(response) if response.is_success() => Ok(Some(response.text())),
            Ok(response) => {
                info!("Data request refused with status {}", response.status());
                Ok(None)
            }
            Err(e) if is_refusal(&e) => {
                info!("Data request refused: {:#}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// An answer from the connector that withholds the data, as opposed to not reaching it.
fn is_refusal(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<ClientError>(),
        Some(ClientError::UnexpectedStatus { .. } | ClientError::MalformedResponse(_))
    )
}

#[async_trait]
impl Scenario for ProhibitAccess {
    fn name(&self) -> &'static str {
        "prohibit-access"
    }

    fn description(&self) -> &'static str {
        "data behind a prohibition is not handed out"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<()> {
        let published = publish_offer(
            &ctx.provider_resources(),
            &ctx.contract(),
            &ArtifactDesc::default(),
            &[RuleDesc::from_value(rules::prohibit_access())],
        )
        .await?;

        match self.pull(ctx, &published).await? {
            Some(data) if data == DEFAULT_ARTIFACT_VALUE => {
                bail!("Prohibited artifact {} was handed out", published.artifact)
            }
            Some(data) => {
                warn!("Received {} bytes that differ from the stored value", data.len());
                Ok(())
            }
            None => Ok(()),
        }
    }
}
