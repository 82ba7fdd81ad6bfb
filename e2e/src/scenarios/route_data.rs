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
use crate::utils::check_linked;
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use dsc_client::model::{ArtifactDesc, EndpointDesc, RouteDesc};
use log::info;

/// Builds a route between two generic endpoints on the provider and reads an artifact's data through it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteData;

#[async_trait]
impl Scenario for RouteData {
    fn name(&self) -> &'static str {
        "route-data"
    }

    fn description(&self) -> &'static str {
        "artifact data can be read through a route"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<()> {
        let provider = ctx.provider_resources();
        let artifact = provider
            .create_artifact(&ArtifactDesc::default())
            .await
            .context("Failed to create artifact")?;
        let route = provider
            .create_route(&RouteDesc::default())
            .await
            .context("Failed to create route")?;

        let start = provider
            .create_endpoint(&EndpointDesc::builder().location(artifact.join("data")).build())
            .await
            .context("Failed to create start endpoint")?;
        let end = provider
            .create_endpoint(&EndpointDesc::builder().location(ctx.consumer_data_endpoint()).build())
            .await
            .context("Failed to create end endpoint")?;
        check_linked(provider.add_start_endpoint_to_route(&route, &start).await?, "start endpoint to route")?;
        check_linked(provider.add_end_endpoint_to_route(&route, &end).await?, "end endpoint to route")?;
        info!("Route {} from {} to {}", route, start, end);

        let response = provider.get_data_with_route(&artifact, &route).await?;
        ensure!(
            response.is_success(),
            "Reading {} through route {} failed with status {}",
            artifact,
            route,
            response.status()
        );
        Ok(())
    }
}
