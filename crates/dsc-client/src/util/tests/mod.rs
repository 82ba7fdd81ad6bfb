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

use crate::error::ClientError;
use crate::util::{OneOrMany, normalize_to_collection, uuid_from_uri};
use rstest::rstest;

#[test]
fn test_normalize_single_value() {
    let normalized = normalize_to_collection(OneOrMany::<String>::from("https://localhost:8080/api/rules/1"));

    assert_eq!(normalized, vec!["https://localhost:8080/api/rules/1".to_string()]);
    assert_eq!(
        serde_json::to_string(&normalized).unwrap(),
        r#"["https://localhost:8080/api/rules/1"]"#
    );
}

#[test]
fn test_normalize_list_is_unchanged() {
    let values = vec!["b".to_string(), "a".to_string(), "c".to_string()];

    let normalized = normalize_to_collection(OneOrMany::<String>::from(values.clone()));

    assert_eq!(normalized, values);
}

#[test]
fn test_normalize_empty_list() {
    let normalized: Vec<String> = normalize_to_collection(OneOrMany::<String>::from(Vec::new()));
    assert!(normalized.is_empty());
}

#[test]
fn test_one_or_many_deserializes_both_shapes() {
    let one: OneOrMany<u32> = serde_json::from_str("7").unwrap();
    let many: OneOrMany<u32> = serde_json::from_str("[7, 8]").unwrap();

    assert_eq!(normalize_to_collection(one), vec![7]);
    assert_eq!(normalize_to_collection(many), vec![7, 8]);
}

#[rstest]
#[case(
    "https://localhost:8080/api/endpoints/3fa85f64-5717-4562-b3fc-2c963f66afa6",
    "3fa85f64-5717-4562-b3fc-2c963f66afa6"
)]
#[case(
    "http://consumer/api/routes/3fa85f64-5717-4562-b3fc-2c963f66afa6/endpoint/start",
    "3fa85f64-5717-4562-b3fc-2c963f66afa6"
)]
#[case(
    "https://localhost:8080/api/endpoints/3fa85f64-5717-4562-b3fc2c963f66afa6",
    "3fa85f64-5717-4562-b3fc2c963f66afa6"
)]
#[case(
    "https://localhost/api/a/11111111-2222-3333-4444-555555555555/b/66666666-7777-8888-9999-000000000000",
    "11111111-2222-3333-4444-555555555555"
)]
fn test_uuid_from_uri(#[case] uri: &str, #[case] expected: &str) {
    assert_eq!(uuid_from_uri(uri).unwrap(), expected);
}

#[rstest]
#[case("https://localhost:8080/api/endpoints/")]
#[case("https://localhost:8080/api/endpoints/3FA85F64-5717-4562-B3FC-2C963F66AFA6")]
#[case("not-a-uuid-at-all")]
fn test_uuid_from_uri_no_match(#[case] uri: &str) {
    match uuid_from_uri(uri) {
        Err(ClientError::InvalidIdentifier(msg)) => assert!(msg.contains(uri)),
        other => panic!("Expected InvalidIdentifier error, got: {:?}", other),
    }
}
