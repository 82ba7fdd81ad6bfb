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

//! End-to-end scenarios. Each one is a pass/fail test case against live connectors.

mod allow_access;
mod multiple_artifacts;
mod multiple_policies;
mod prohibit_access;
mod route_data;
mod subscription;
mod unique_remote_data;
mod update_artifact;

pub use allow_access::AllowAccess;
pub use multiple_artifacts::MultipleArtifacts;
pub use multiple_policies::MultiplePolicies;
pub use prohibit_access::ProhibitAccess;
pub use route_data::RouteData;
pub use subscription::Subscription;
pub use unique_remote_data::UniqueRemoteData;
pub use update_artifact::UpdateArtifact;

use crate::context::ScenarioContext;
use async_trait::async_trait;

/// A sequenced workflow over the connector APIs that ends in an assertion.
///
/// `run` returns an error carrying the cause when the scenario fails, whether the connector answered unexpectedly
/// or an assertion did not hold.
#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    async fn run(&self, ctx: &ScenarioContext) -> anyhow::Result<()>;
}

/// All scenarios in their default configuration, in run order.
pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(AllowAccess),
        Box::new(ProhibitAccess),
        Box::new(UpdateArtifact),
        Box::new(UniqueRemoteData),
        Box::new(MultipleArtifacts),
        Box::new(MultiplePolicies::default()),
        Box::new(RouteData),
        Box::new(Subscription),
    ]
}

/// Looks up a scenario by name. `multiple-policies-rejection` selects the multiple-policies scenario with the
/// partial acceptance check enabled.
pub fn find_scenario(name: &str) -> Option<Box<dyn Scenario>> {
    if name == MultiplePolicies::WITH_REJECTION_CHECK {
        return Some(Box::new(MultiplePolicies::with_rejection_check()));
    }
    all_scenarios().into_iter().find(|scenario| scenario.name() == name)
}

pub fn scenario_names() -> Vec<&'static str> {
    let mut names: Vec<_> = all_scenarios().iter().map(|scenario| scenario.name()).collect();
    names.push(MultiplePolicies::WITH_REJECTION_CHECK);
    names
}
