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

//! Connector sessions and settings shared by all scenarios.

use bon::Builder;
use dsc_client::model::ContractDesc;
use dsc_client::util::{Clock, default_clock};
use dsc_client::{ClientError, ConfigurationApi, ConnectorConfig, ConnectorSession, IdsApi, ResourceApi, SubscriptionApi};
use std::sync::Arc;

/// Data source of the remote artifacts created by the scenarios.
pub const DEFAULT_REMOTE_DATA_URL: &str = "https://example.org/";

/// Validity of the contract offers created by the scenarios, counted from now.
pub const DEFAULT_CONTRACT_DAYS: i64 = 365;

/// Settings of a scenario run.
#[derive(Builder, Clone)]
pub struct ScenarioConfig {
    /// Connector offering the data
    pub provider: ConnectorConfig,
    /// Connector negotiating for and consuming the data. May be the same connector as the provider.
    pub consumer: ConnectorConfig,
    /// URL the remote artifacts point at; the provider fetches it on download
    #[builder(into, default = DEFAULT_REMOTE_DATA_URL)]
    pub remote_data_url: String,
    #[builder(default = DEFAULT_CONTRACT_DAYS)]
    pub contract_days: i64,
    #[builder(default = default_clock())]
    pub clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ScenarioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioConfig")
            .field("provider", &self.provider)
            .field("consumer", &self.consumer)
            .field("remote_data_url", &self.remote_data_url)
            .field("contract_days", &self.contract_days)
            .finish()
    }
}

/// Authenticated sessions against the provider and the consumer.
pub struct ScenarioContext {
    config: ScenarioConfig,
    provider: ConnectorSession,
    consumer: ConnectorSession,
}

impl ScenarioContext {
    pub fn new(config: ScenarioConfig) -> Result<Self, ClientError> {
        let provider = ConnectorSession::new(config.provider.clone())?;
        let consumer = ConnectorSession::new(config.consumer.clone())?;
        Ok(Self {
            config,
            provider,
            consumer,
        })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// The provider's IDS data endpoint, the `recipient` of every consumer message.
    pub fn provider_data_endpoint(&self) -> String {
        self.config.provider.ids_data_endpoint()
    }

    pub fn consumer_data_endpoint(&self) -> String {
        self.config.consumer.ids_data_endpoint()
    }

    /// Returns true when provider and consumer are one connector talking to itself.
    pub fn is_single_connector(&self) -> bool {
        self.config.provider.base() == self.config.consumer.base()
    }

    /// A contract offer valid from now for the configured number of days.
    pub fn contract(&self) -> ContractDesc {
        ContractDesc::valid_for(self.config.clock.as_ref(), self.config.contract_days)
    }

    pub fn provider_resources(&self) -> ResourceApi {
        ResourceApi::new(self.provider.clone())
    }

    pub fn provider_subscriptions(&self) -> SubscriptionApi {
        SubscriptionApi::new(self.provider.clone())
    }

    pub fn provider_configuration(&self) -> ConfigurationApi {
        ConfigurationApi::new(self.provider.clone())
    }

    pub fn consumer_resources(&self) -> ResourceApi {
        ResourceApi::new(self.consumer.clone())
    }

    pub fn consumer_ids(&self) -> IdsApi {
        IdsApi::new(self.consumer.clone())
    }

    pub fn consumer_subscriptions(&self) -> SubscriptionApi {
        SubscriptionApi::new(self.consumer.clone())
    }
}
