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

//! Authenticated HTTP session shared by all connector clients.

use crate::config::ConnectorConfig;
use crate::error::{ClientError, Result};
use crate::model::EntityUrl;
use log::debug;
use reqwest::header::{HeaderMap, LOCATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Ordered query parameters. Keys may repeat; absent values are never added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds the parameter only when a value is present. `Some("")` is sent as an empty value.
    pub fn with_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Adds the key once per value.
    pub fn with_all<I>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for value in values {
            self = self.with(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}

/// A fully read HTTP response. Callers decide which status codes are acceptable.
#[derive(Debug, Clone)]
pub struct ConnectorResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ConnectorResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self { status, headers, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ClientError::MalformedResponse(format!("Failed to parse response body: {}", e)))
    }

    /// The `Location` header, which carries the identifier of a newly created entity.
    pub fn location(&self) -> Result<EntityUrl> {
        let location = self
            .headers
            .get(LOCATION)
            .ok_or_else(|| ClientError::MissingIdentifier(format!("No Location header in {} response", self.status)))?;
        let location = location
            .to_str()
            .map_err(|e| ClientError::MalformedResponse(format!("Location header is not valid text: {}", e)))?;
        EntityUrl::parse(location).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }

    /// Passes the response through when its status is one of `expected`.
    pub fn expect_status(self, expected: &[StatusCode], context: &str) -> Result<Self> {
        if expected.contains(&self.status) {
            Ok(self)
        } else {
            Err(self.into_error(context))
        }
    }

    /// Passes the response through when its status is 2xx.
    pub fn expect_success(self, context: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(self.into_error(context))
        }
    }

    pub fn into_error(self, context: &str) -> ClientError {
        ClientError::UnexpectedStatus {
            status: self.status,
            context: context.to_string(),
            body: self.text(),
        }
    }
}

/// An authenticated session against one connector.
///
/// Paths starting with `/` are resolved against the configured base URL; absolute URLs, such as entity identifiers
/// returned by the connector, are used as they are.
#[derive(Debug, Clone)]
pub struct ConnectorSession {
    config: ConnectorConfig,
    http_client: Client,
}

impl ConnectorSession {
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        let mut builder = Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ClientError::InvalidConfiguration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http_client })
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base()
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
        }
    }

    pub async fn get(&self, path: &str, params: &QueryParams) -> Result<ConnectorResponse> {
        self.send(Method::GET, path, params, |request| request).await
    }

    pub async fn post<B>(&self, path: &str, body: &B, params: &QueryParams) -> Result<ConnectorResponse>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, params, |request| request.json(body)).await
    }

    /// POST without a request body.
    pub async fn post_empty(&self, path: &str, params: &QueryParams) -> Result<ConnectorResponse> {
        self.send(Method::POST, path, params, |request| request).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<ConnectorResponse>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, &QueryParams::new(), |request| request.json(body))
            .await
    }

    /// PUT of a raw payload, e.g. artifact data.
    pub async fn put_body(&self, path: &str, body: impl Into<Vec<u8>>) -> Result<ConnectorResponse> {
        let body = body.into();
        self.send(Method::PUT, path, &QueryParams::new(), |request| request.body(body))
            .await
    }

    /// PUT without a request body; the operation is carried by the query.
    pub async fn put_params(&self, path: &str, params: &QueryParams) -> Result<ConnectorResponse> {
        self.send(Method::PUT, path, params, |request| request).await
    }

    pub async fn delete(&self, path: &str) -> Result<ConnectorResponse> {
        self.send(Method::DELETE, path, &QueryParams::new(), |request| request)
            .await
    }

    async fn send<F>(&self, method: Method, path: &str, params: &QueryParams, with_body: F) -> Result<ConnectorResponse>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(path);
        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .basic_auth(&self.config.username, Some(&self.config.password));
        if !params.is_empty() {
            request = request.query(params.as_slice());
        }

        let response = with_body(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status();
        debug!("{} {} -> {}", method, url, status);

        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read response of {} {}: {}", method, url, e)))?;

        Ok(ConnectorResponse::new(status, headers, body.to_vec()))
    }
}
