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

//! JSON-LD usage control rules understood by the connector's policy patterns.
//!
//! Every call mints a fresh `@id`, so the same pattern can be attached to several contracts.

use serde_json::{Map, Value, json};
use uuid::Uuid;

const IDS_NS: &str = "https://w3id.org/idsa/core/";
const IDSC_NS: &str = "https://w3id.org/idsa/code/";
const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

fn autogen_id(kind: &str) -> String {
    format!("https://w3id.org/idsa/autogen/{}/{}", kind, Uuid::new_v4())
}

fn typed_string(value: &str) -> Value {
    json!([{ "@value": value, "@type": XSD_STRING }])
}

fn rule(rule_type: &str, kind: &str, description: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("@context".to_string(), json!({ "ids": IDS_NS, "idsc": IDSC_NS }));
    map.insert("@type".to_string(), Value::String(rule_type.to_string()));
    map.insert("@id".to_string(), Value::String(autogen_id(kind)));
    map.insert("ids:action".to_string(), json!([{ "@id": "idsc:USE" }]));
    map.insert("ids:description".to_string(), typed_string(description));
    map.insert("ids:title".to_string(), typed_string("Example Usage Policy"));
    map
}

fn constraint(left: &str, operator: &str, right_value: &str, right_type: &str) -> Value {
    json!({
        "@type": "ids:Constraint",
        "@id": autogen_id("constraint"),
        "ids:leftOperand": { "@id": left },
        "ids:operator": { "@id": operator },
        "ids:rightOperand": { "@value": right_value, "@type": right_type },
    })
}

fn render(map: Map<String, Value>) -> String {
    Value::Object(map).to_string()
}

/// Unrestricted usage.
pub fn provide_access() -> String {
    render(rule("ids:Permission", "permission", "provide-access"))
}

/// Usage is not allowed at all.
pub fn prohibit_access() -> String {
    render(rule("ids:Prohibition", "prohibition", "prohibit-access"))
}

/// Usage is allowed; every access is logged by the provider.
pub fn usage_logging() -> String {
    let mut map = rule("ids:Permission", "permission", "usage-logging");
    map.insert(
        "ids:postDuty".to_string(),
        json!([{
            "@type": "ids:Duty",
            "@id": autogen_id("duty"),
            "ids:action": [{ "@id": "idsc:LOG" }],
        }]),
    );
    render(map)
}

/// Usage is allowed; each access is reported to `endpoint`.
pub fn usage_notification(endpoint: &str) -> String {
    let mut map = rule("ids:Permission", "permission", "usage-notification");
    map.insert(
        "ids:postDuty".to_string(),
        json!([{
            "@type": "ids:Duty",
            "@id": autogen_id("duty"),
            "ids:action": [{ "@id": "idsc:NOTIFY" }],
            "ids:constraint": [constraint(
                "idsc:ENDPOINT",
                "idsc:DEFINES_AS",
                endpoint,
                "http://www.w3.org/2001/XMLSchema#anyURI",
            )],
        }]),
    );
    render(map)
}

/// Usage is allowed at most `max` times.
pub fn n_times_usage(max: u32) -> String {
    let mut map = rule("ids:Permission", "permission", "n-times-usage");
    map.insert(
        "ids:constraint".to_string(),
        json!([constraint(
            "idsc:COUNT",
            "idsc:LTEQ",
            &max.to_string(),
            "http://www.w3.org/2001/XMLSchema#double",
        )]),
    );
    render(map)
}

/// Usage is allowed for an ISO 8601 duration (e.g. `PT1M30S`) after the agreement.
pub fn duration_usage(duration: &str) -> String {
    let mut map = rule("ids:Permission", "permission", "duration-usage");
    map.insert(
        "ids:constraint".to_string(),
        json!([constraint(
            "idsc:ELAPSED_TIME",
            "idsc:SHORTER_EQ",
            duration,
            "http://www.w3.org/2001/XMLSchema#duration",
        )]),
    );
    render(map)
}
