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
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use dsc_client::model::ArtifactDesc;

const UPDATED_VALUE: &str = "UPDATED VALUE";

/// Replaces an artifact's description on the provider. Passes when the connector answers 204.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateArtifact;

#[async_trait]
impl Scenario for UpdateArtifact {
    fn name(&self) -> &'static str {
        "update-artifact"
    }

    fn description(&self) -> &'static str {
        "a full artifact replacement is accepted with 204"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<()> {
        let provider = ctx.provider_resources();
        let artifact = provider
            .create_artifact(&ArtifactDesc::default())
            .await
            .context("Failed to create artifact")?;

        let replacement = ArtifactDesc::builder()
            .title("updated artifact")
            .description("replaced by the update-artifact scenario")
            .value(UPDATED_VALUE)
            .build();
        let updated = provider.update_artifact(&artifact, &replacement).await?;

        ensure!(updated, "Update of artifact {} was not answered with 204", artifact);
        Ok(())
    }
}
