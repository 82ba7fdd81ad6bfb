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

use crate::config::ConnectorConfig;
use crate::error::ClientError;
use crate::ids::{ContractRequest, IdsApi};
use crate::model::IdsRule;
use crate::session::ConnectorSession;
use crate::templates::rules;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const PROVIDER: &str = "https://provider:8080/api/ids/data";
const CATALOG: &str = "https://provider:8080/api/catalogs/5c0b4a8e-4f2a-4d8c-9d3b-6a1e2f3c4d5e";
const RESOURCE: &str = "https://provider:8080/api/offers/9b2f3a4c-1d2e-4f5a-8b6c-7d8e9f0a1b2c";
const ARTIFACT: &str = "https://provider:8080/api/artifacts/3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn ids_api(server: &MockServer) -> IdsApi {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = ConnectorConfig::builder().base_url(server.uri()).build();
    IdsApi::new(ConnectorSession::new(config).unwrap())
}

fn query_values(request: &Request, key: &str) -> Vec<String> {
    request
        .url
        .query_pairs()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

fn permission() -> IdsRule {
    IdsRule::from_json(&rules::provide_access()).unwrap().with_target(ARTIFACT)
}

#[tokio::test]
async fn test_description_request_omits_absent_element() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ids/description"))
        .and(query_param("recipient", PROVIDER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "@type": "ids:BaseConnector" })))
        .expect(1)
        .mount(&server)
        .await;

    let description = ids_api(&server).description_request(Some(PROVIDER), None).await.unwrap();

    assert_eq!(description["@type"], "ids:BaseConnector");
    let requests = server.received_requests().await.unwrap();
    assert!(query_values(&requests[0], "elementId").is_empty());
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_describe_catalog_sends_element_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ids/description"))
        .and(query_param("recipient", PROVIDER))
        .and(query_param("elementId", CATALOG))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@type": "ids:ResourceCatalog",
            "@id": CATALOG,
            "ids:offeredResource": { "@id": RESOURCE }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = ids_api(&server).describe_catalog(PROVIDER, CATALOG).await.unwrap();

    assert_eq!(catalog.offered_resource(0).unwrap().id().unwrap(), RESOURCE);
}

#[tokio::test]
async fn test_description_failure_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ids/description"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Connector unavailable"))
        .mount(&server)
        .await;

    let err = ids_api(&server)
        .describe_resource(PROVIDER, RESOURCE)
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert!(err.to_string().contains("Connector unavailable"));
}

#[tokio::test]
async fn test_contract_request_query_and_body() {
    let server = MockServer::start().await;
    let agreement = format!("{}/api/agreements/1c4b2f7e-8a3d-4b5c-9e6f-0a1b2c3d4e5f", server.uri());

    Mock::given(method("POST"))
        .and(path("/api/ids/contract"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "confirmed": true,
            "_links": { "self": { "href": agreement } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ContractRequest::builder()
        .recipient(PROVIDER)
        .resource_ids(vec![RESOURCE.to_string(), CATALOG.to_string()])
        .artifact_ids(ARTIFACT)
        .download(false)
        .rules(permission())
        .build();

    let negotiated = ids_api(&server).negotiate(&request).await.unwrap();

    assert_eq!(negotiated.as_str(), agreement);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(query_values(&requests[0], "recipient"), vec![PROVIDER]);
    assert_eq!(query_values(&requests[0], "resourceIds"), vec![RESOURCE, CATALOG]);
    assert_eq!(query_values(&requests[0], "artifactIds"), vec![ARTIFACT]);
    assert_eq!(query_values(&requests[0], "download"), vec!["false"]);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let sent = body.as_array().expect("rules are sent as an array");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["ids:target"], ARTIFACT);
    assert_eq!(sent[0]["@type"], "ids:Permission");
}

#[tokio::test]
async fn test_contract_request_omits_absent_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ids/contract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_links": { "self": { "href": "https://consumer:8080/api/agreements/1c4b2f7e-8a3d-4b5c-9e6f-0a1b2c3d4e5f" } }
        })))
        .mount(&server)
        .await;

    let request = ContractRequest::builder()
        .recipient(PROVIDER)
        .rules(vec![permission(), permission()])
        .build();

    ids_api(&server).contract_request(&request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(query_values(&requests[0], "resourceIds").is_empty());
    assert!(query_values(&requests[0], "download").is_empty());
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_rejected_contract_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ids/contract"))
        .respond_with(ResponseTemplate::new(417).set_body_string("Policy restriction detected"))
        .mount(&server)
        .await;

    let request = ContractRequest::builder()
        .recipient(PROVIDER)
        .resource_ids(RESOURCE)
        .artifact_ids(ARTIFACT)
        .rules(permission())
        .build();
    let api = ids_api(&server);

    let raw = api.contract_request_raw(&request).await.unwrap();
    assert_eq!(raw.status().as_u16(), 417);

    match api.contract_request(&request).await {
        Err(ClientError::UnexpectedStatus { status, body, .. }) => {
            assert_eq!(status.as_u16(), 417);
            assert_eq!(body, "Policy restriction detected");
        }
        other => panic!("Expected UnexpectedStatus error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_agreement_without_links() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ids/contract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "confirmed": false })))
        .mount(&server)
        .await;

    let request = ContractRequest::builder().rules(permission()).build();

    match ids_api(&server).negotiate(&request).await {
        Err(ClientError::MalformedResponse(msg)) => assert!(msg.contains("_links.self.href")),
        other => panic!("Expected MalformedResponse error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_agreement_body_not_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ids/contract"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let request = ContractRequest::builder().rules(permission()).build();
    let result = ids_api(&server).contract_request(&request).await;

    assert!(matches!(result, Err(ClientError::MalformedResponse(_))), "got {:?}", result);
}
