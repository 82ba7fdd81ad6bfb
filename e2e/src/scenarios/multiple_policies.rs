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
use crate::utils::{contract_request, negotiate, publish_offer};
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use dsc_client::model::{ArtifactDesc, RuleDesc};
use dsc_client::templates::rules;
use log::info;

const MAX_USAGES: u32 = 5;

/// Publishes one artifact under a contract with two rules and negotiates both.
///
/// With the rejection check enabled, a contract request accepting only the first rule is sent first and must be
/// refused by the provider. That refusal is connector policy, so it is only asserted, never derived here.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplePolicies {
    check_partial_rejection: bool,
}

impl MultiplePolicies {
    pub const WITH_REJECTION_CHECK: &'static str = "multiple-policies-rejection";

    pub fn with_rejection_check() -> Self {
        Self {
            check_partial_rejection: true,
        }
    }
}

#[async_trait]
impl Scenario for MultiplePolicies {
    fn name(&self) -> &'static str {
        if self.check_partial_rejection {
            Self::WITH_REJECTION_CHECK
        } else {
            "multiple-policies"
        }
    }

    fn description(&self) -> &'static str {
        "a contract with two rules is agreed when both are accepted"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<()> {
        let contract_rules = [
            RuleDesc::from_value(rules::usage_notification(&ctx.consumer_data_endpoint())),
            RuleDesc::from_value(rules::n_times_usage(MAX_USAGES)),
        ];
        let published =
            publish_offer(&ctx.provider_resources(), &ctx.contract(), &ArtifactDesc::default(), &contract_rules).await?;

        let ids = ctx.consumer_ids();
        let recipient = ctx.provider_data_endpoint();
        let catalog = ids
            .describe_catalog(&recipient, published.catalog.as_str())
            .await
            .context("Failed to describe catalog")?;
        let resource = catalog.offered_resource(0)?;
        let resource_id = resource.id()?.to_string();
        let artifact_id = resource.first_artifact_id()?.to_string();
        let contract_id = resource.contract_offer(0)?.id()?.to_string();

        let contract = ids
            .describe_contract(&recipient, &contract_id)
            .await
            .context("Failed to describe contract")?;
        let notify = contract.permission(0)?.clone().with_target(artifact_id.as_str());
        let count = contract.permission(1)?.clone().with_target(artifact_id.as_str());

        if self.check_partial_rejection {
            let partial = contract_request(ctx, resource_id.as_str(), artifact_id.as_str(), notify.clone(), true);
            let response = ids.contract_request_raw(&partial).await?;
            ensure!(
                !response.is_success(),
                "Accepting one of two rules was answered with {}",
                response.status()
            );
            info!("Partial acceptance refused with {}", response.status());
        }

        let agreement = negotiate(ctx, resource_id, artifact_id, vec![notify, count], true).await?;
        info!("Agreement {}", agreement);
        Ok(())
    }
}
