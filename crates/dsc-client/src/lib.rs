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

//! Clients for the REST and IDS endpoints of a dataspace connector.
//!
//! The connector is an external system; this crate only shapes requests and interprets responses. Resources are
//! created through [`ResourceApi`], negotiated through [`IdsApi`] and observed through [`SubscriptionApi`] and
//! [`ConfigurationApi`]. All of them share a [`ConnectorSession`] built from a [`ConnectorConfig`].

pub mod config;
pub mod configuration;
pub mod error;
pub mod ids;
pub mod model;
pub mod resource;
pub mod session;
pub mod subscription;
pub mod templates;
pub mod util;

pub use config::ConnectorConfig;
pub use configuration::ConfigurationApi;
pub use error::ClientError;
pub use ids::{ContractRequest, IdsApi};
pub use model::EntityUrl;
pub use resource::ResourceApi;
pub use session::{ConnectorResponse, ConnectorSession, QueryParams};
pub use subscription::SubscriptionApi;
pub use util::{OneOrMany, normalize_to_collection, uuid_from_uri};
