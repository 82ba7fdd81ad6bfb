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

use crate::error::{ClientError, Result};
use crate::session::{ConnectorSession, QueryParams};
use serde::Deserialize;
use serde_json::Value;

const NEGOTIATION_PATH: &str = "/api/configuration/negotiation";
const PATTERN_PATH: &str = "/api/configuration/pattern";

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: bool,
}

/// Client for the connector's runtime configuration.
#[derive(Debug, Clone)]
pub struct ConfigurationApi {
    session: ConnectorSession,
}

impl ConfigurationApi {
    pub fn new(session: ConnectorSession) -> Self {
        Self { session }
    }

    pub async fn get_active_configuration(&self) -> Result<Value> {
        self.get_json("/api/configurations/active", "Failed to read active configuration")
            .await
    }

    /// The connector's own IDS self-description.
    pub async fn get_self_description(&self) -> Result<Value> {
        self.get_json("/api/connector", "Failed to read self-description").await
    }

    /// Whether contract negotiation is enabled. When disabled, the provider accepts any contract request.
    pub async fn get_negotiation_status(&self) -> Result<bool> {
        self.get_status(NEGOTIATION_PATH).await
    }

    pub async fn set_negotiation_status(&self, enabled: bool) -> Result<bool> {
        self.set_status(NEGOTIATION_PATH, enabled).await
    }

    /// Whether usage policies with unsupported patterns are accepted.
    pub async fn get_pattern_status(&self) -> Result<bool> {
        self.get_status(PATTERN_PATH).await
    }

    pub async fn set_pattern_status(&self, enabled: bool) -> Result<bool> {
        self.set_status(PATTERN_PATH, enabled).await
    }

    async fn get_json(&self, path: &str, context: &str) -> Result<Value> {
        self.session
            .get(path, &QueryParams::new())
            .await?
            .expect_success(context)?
            .json()
    }

    async fn get_status(&self, path: &str) -> Result<bool> {
        let response: StatusResponse = self
            .session
            .get(path, &QueryParams::new())
            .await?
            .expect_success(&format!("Failed to read {}", path))?
            .json()?;
        Ok(response.status)
    }

    /// Sets a switch and returns the value the connector reports back.
    async fn set_status(&self, path: &str, enabled: bool) -> Result<bool> {
        let params = QueryParams::new().with("status", enabled);
        let response: StatusResponse = self
            .session
            .put_params(path, &params)
            .await?
            .expect_success(&format!("Failed to update {}", path))?
            .json()?;
        if response.status != enabled {
            return Err(ClientError::MalformedResponse(format!(
                "{} reports status {} after setting it to {}",
                path, response.status, enabled
            )));
        }
        Ok(response.status)
    }
}
