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

//! End-to-end scenarios driving a provider and a consumer connector.
//!
//! Scenarios run against live connectors. The runner binary in `test-client` selects them by name; the tests in
//! `src/tests` run all of them against the connectors named by `PROVIDER_URL` and `CONSUMER_URL`.
//!
//! Run tests with: `cargo test --package dsc-e2e-tests --features e2e -- --ignored`

pub mod context;
pub mod scenarios;
pub mod utils;

#[cfg(all(test, feature = "e2e"))]
pub mod tests;

pub use context::{ScenarioConfig, ScenarioContext};
pub use scenarios::{Scenario, all_scenarios, find_scenario, scenario_names};

use log::{error, info};
use std::time::{Duration, Instant};

/// Result of one scenario run.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub elapsed: Duration,
    pub result: anyhow::Result<()>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs one scenario, logging its verdict.
pub async fn run_scenario(scenario: &dyn Scenario, ctx: &ScenarioContext) -> ScenarioOutcome {
    info!("Running {}: {}", scenario.name(), scenario.description());
    let start = Instant::now();
    let result = scenario.run(ctx).await;
    let elapsed = start.elapsed();
    match &result {
        Ok(()) => info!("{} passed in {:?}", scenario.name(), elapsed),
        Err(e) => error!("{} failed after {:?}: {:#}", scenario.name(), elapsed, e),
    }
    ScenarioOutcome {
        name: scenario.name(),
        elapsed,
        result,
    }
}

/// Runs the scenarios one after another. A failing scenario does not stop the ones after it.
pub async fn run_scenarios(scenarios: &[Box<dyn Scenario>], ctx: &ScenarioContext) -> Vec<ScenarioOutcome> {
    let mut outcomes = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        outcomes.push(run_scenario(scenario.as_ref(), ctx).await);
    }
    outcomes
}

/// Process exit status for a set of outcomes: `0` when all passed, `1` otherwise.
pub fn exit_code(outcomes: &[ScenarioOutcome]) -> i32 {
    if outcomes.iter().all(ScenarioOutcome::passed) { 0 } else { 1 }
}
