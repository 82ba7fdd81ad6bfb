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

use crate::error::Result;
use crate::model::{CollectionPage, EntityUrl, SubscriptionDesc};
use crate::session::{ConnectorResponse, ConnectorSession, QueryParams};

const SUBSCRIPTIONS_PATH: &str = "/api/subscriptions";
const SUBSCRIBE_PATH: &str = "/api/ids/subscribe";

/// Client for push-subscription registration, locally and at a remote connector.
#[derive(Debug, Clone)]
pub struct SubscriptionApi {
    session: ConnectorSession,
}

impl SubscriptionApi {
    pub fn new(session: ConnectorSession) -> Self {
        Self { session }
    }

    /// Registers a subscription at this connector and returns its URL.
    pub async fn create_subscription(&self, desc: &SubscriptionDesc) -> Result<EntityUrl> {
        self.session
            .post(SUBSCRIPTIONS_PATH, desc, &QueryParams::new())
            .await?
            .location()
    }

    /// Asks this connector to subscribe at a remote connector. `params` carries at least `recipient`.
    pub async fn subscription_message(&self, desc: &SubscriptionDesc, params: &QueryParams) -> Result<ConnectorResponse> {
        self.session.post(SUBSCRIBE_PATH, desc, params).await
    }

    /// Subscription message addressed to the IDS data endpoint `recipient`.
    pub async fn subscribe_at(&self, recipient: &str, desc: &SubscriptionDesc) -> Result<ConnectorResponse> {
        self.subscription_message(desc, &QueryParams::new().with("recipient", recipient))
            .await
    }

    pub async fn get_subscriptions(&self) -> Result<ConnectorResponse> {
        self.session.get(SUBSCRIPTIONS_PATH, &QueryParams::new()).await
    }

    pub async fn list_subscriptions(&self) -> Result<CollectionPage> {
        self.get_subscriptions()
            .await?
            .expect_success("Failed to list subscriptions")?
            .json()
    }

    pub async fn count_subscriptions(&self) -> Result<u64> {
        Ok(self.list_subscriptions().await?.total_elements())
    }
}
