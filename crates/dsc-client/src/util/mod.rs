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

pub mod clock;

pub use clock::{Clock, FixedClock, default_clock};

use crate::error::{ClientError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Matches a UUID in 8-4-4-4-12 hex groups; the hyphen before the last group is optional.
static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-?[0-9a-f]{12}").expect("valid UUID pattern")
});

/// A single value or a list of values.
///
/// Relationship endpoints and IDS contract requests always take lists; this type lets callers pass one identifier or
/// many through the same call. It also deserializes JSON-LD members that may appear either as a bare object or as an
/// array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<T: Clone> From<&T> for OneOrMany<T> {
    fn from(value: &T) -> Self {
        OneOrMany::One(value.clone())
    }
}

impl<T: Clone> From<&[T]> for OneOrMany<T> {
    fn from(values: &[T]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(values: [T; N]) -> Self {
        OneOrMany::Many(values.to_vec())
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

/// Wraps a single value into a one-element list and passes a list through unchanged, preserving order.
pub fn normalize_to_collection<T>(value: OneOrMany<T>) -> Vec<T> {
    match value {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    }
}

/// Extracts the first UUID found in a URI, e.g. the endpoint id at the end of `.../api/endpoints/{uuid}`.
pub fn uuid_from_uri(uri: &str) -> Result<String> {
    UUID_PATTERN
        .find(uri)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ClientError::InvalidIdentifier(format!("No UUID found in {}", uri)))
}

/// Serde adapter for JSON-LD members holding either one object or an array of objects.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<OneOrMany<T>>::deserialize(deserializer).map(|v| v.map(normalize_to_collection).unwrap_or_default())
}

#[cfg(test)]
mod tests;
