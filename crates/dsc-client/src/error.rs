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

use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the connector clients.
///
/// Each variant names the cause of a failed exchange so that a scenario failing on it can be attributed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{context} with status {status}: {body}")]
    UnexpectedStatus {
        status: StatusCode,
        context: String,
        body: String,
    },

    #[error("Missing identifier: {0}")]
    MissingIdentifier(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// Returns the HTTP status carried by an [`UnexpectedStatus`](ClientError::UnexpectedStatus) error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn malformed(key: &str) -> Self {
        ClientError::MalformedResponse(format!("expected key '{}' not found", key))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
