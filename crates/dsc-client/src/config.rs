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

use bon::Builder;
use std::time::Duration;

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password";

/// Connection settings for a single connector instance.
#[derive(Builder, Clone)]
pub struct ConnectorConfig {
    /// Base URL of the connector (e.g., "https://localhost:8080")
    #[builder(into)]
    pub base_url: String,
    /// Basic auth user (defaults to "admin")
    #[builder(into, default = DEFAULT_USERNAME)]
    pub username: String,
    /// Basic auth password (defaults to "password")
    #[builder(into, default = DEFAULT_PASSWORD)]
    pub password: String,
    /// Skip TLS certificate verification. Only meant for local test connectors with self-signed certificates.
    #[builder(default)]
    pub accept_invalid_certs: bool,
    /// Optional HTTP request timeout. Requests do not time out when unset.
    pub request_timeout: Option<Duration>,
}

impl ConnectorConfig {
    /// The base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// The IDS data endpoint of this connector, used as `recipient` by a remote consumer.
    pub fn ids_data_endpoint(&self) -> String {
        format!("{}/api/ids/data", self.base())
    }
}

impl std::fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
