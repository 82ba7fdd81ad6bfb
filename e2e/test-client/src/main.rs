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

//! Scenario runner: runs one or all end-to-end scenarios against a provider and a consumer connector and exits with
//! status 0 when every selected scenario passed, 1 otherwise.

use anyhow::{Context, Result, bail};
use clap::Parser;
use dsc_client::ConnectorConfig;
use dsc_e2e_tests::{
    Scenario, ScenarioConfig, ScenarioContext, all_scenarios, exit_code, find_scenario, run_scenarios, scenario_names,
};
use log::info;

const DEFAULT_PROVIDER_URL: &str = "http://provider-dataspace-connector";
const DEFAULT_CONSUMER_URL: &str = "http://consumer-dataspace-connector";

#[derive(Parser, Debug)]
#[command(name = "dsc-test-client", about = "Runs end-to-end scenarios against dataspace connectors")]
struct Args {
    /// Scenario to run, or "all"
    #[arg(short, long, env = "TEST_MODE", default_value = "all")]
    scenario: String,

    /// Base URL of the provider connector
    #[arg(long, env = "PROVIDER_URL")]
    provider: Option<String>,

    /// Base URL of the consumer connector
    #[arg(long, env = "CONSUMER_URL")]
    consumer: Option<String>,

    /// Provider URL given as the first positional argument
    #[arg(value_name = "PROVIDER")]
    provider_arg: Option<String>,

    /// Consumer URL given as the second positional argument
    #[arg(value_name = "CONSUMER", requires = "provider_arg")]
    consumer_arg: Option<String>,

    #[arg(long, env = "DSC_USERNAME", default_value = dsc_client::config::DEFAULT_USERNAME)]
    username: String,

    #[arg(long, env = "DSC_PASSWORD", default_value = dsc_client::config::DEFAULT_PASSWORD, hide_env_values = true)]
    password: String,

    /// Accept self-signed TLS certificates (test connectors only)
    #[arg(long, env = "DSC_INSECURE_TLS")]
    insecure: bool,

    /// List the available scenarios and exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn provider_url(&self) -> String {
        self.provider_arg
            .clone()
            .or_else(|| self.provider.clone())
            .unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string())
    }

    fn consumer_url(&self) -> String {
        self.consumer_arg
            .clone()
            .or_else(|| self.consumer.clone())
            .unwrap_or_else(|| DEFAULT_CONSUMER_URL.to_string())
    }

    fn connector(&self, base_url: String) -> ConnectorConfig {
        ConnectorConfig::builder()
            .base_url(base_url)
            .username(self.username.as_str())
            .password(self.password.as_str())
            .accept_invalid_certs(self.insecure)
            .build()
    }

    fn scenarios(&self) -> Result<Vec<Box<dyn Scenario>>> {
        if self.scenario == "all" {
            return Ok(all_scenarios());
        }
        match find_scenario(&self.scenario) {
            Some(scenario) => Ok(vec![scenario]),
            None => bail!(
                "Unknown scenario: {} (available: all, {})",
                self.scenario,
                scenario_names().join(", ")
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list {
        for name in scenario_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let scenarios = match args.scenarios() {
        Ok(scenarios) => scenarios,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let provider = args.provider_url();
    let consumer = args.consumer_url();
    println!("=== Dataspace Connector Test Client ===");
    println!("Provider: {}", provider);
    println!("Consumer: {}", consumer);
    println!("Scenario: {}", args.scenario);
    println!();

    let config = ScenarioConfig::builder()
        .provider(args.connector(provider))
        .consumer(args.connector(consumer))
        .build();
    let ctx = ScenarioContext::new(config).context("Failed to create connector sessions")?;

    let outcomes = run_scenarios(&scenarios, &ctx).await;

    println!();
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!("[PASS] {} ({:?})", outcome.name, outcome.elapsed),
            Err(e) => println!("[FAIL] {} ({:?}): {:#}", outcome.name, outcome.elapsed, e),
        }
    }

    let code = exit_code(&outcomes);
    info!(
        "{} of {} scenarios passed",
        outcomes.iter().filter(|outcome| outcome.passed()).count(),
        outcomes.len()
    );
    std::process::exit(code);
}
