// yadisk: Rust client for the Yandex.Disk REST API
// Copyright 2025 Yadisk Rust Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for Yandex.Disk operations

use crate::disk::error_response::DiskErrorResponse;
use std::time::Duration;
use thiserror::Error;

/// Errors raised locally, before a request is sent or while interpreting a response
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("path must not be empty")]
    EmptyPath,

    #[error("resource '{path}' is not a directory")]
    NotADirectory { path: String },

    #[error("link '{href}' does not point to an asynchronous operation")]
    NotAnOperation { href: String },

    #[error("unsupported templated link '{href}'")]
    TemplatedLink { href: String },

    #[error("invalid link href '{href}': {source}")]
    InvalidLink {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid HTTP method '{0}' in link")]
    InvalidMethod(String),

    #[error("invalid operation status '{0}'")]
    UnknownOperationStatus(String),

    #[error("unexpected HTTP status code {got}; expected {expected}")]
    UnexpectedStatus { expected: &'static str, got: u16 },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("OAuth token is missing")]
    MissingToken,

    #[error("invalid header value for '{name}'")]
    InvalidHeaderValue { name: &'static str },

    #[error("operation '{id}' did not finish within {elapsed:?}")]
    OperationTimeout { id: String, elapsed: Duration },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Transport level failures
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Network error occurred: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors returned by the Yandex.Disk server
#[derive(Error, Debug)]
pub enum DiskServerError {
    #[error("{0}")]
    ApiError(Box<DiskErrorResponse>),

    #[error("HTTP error: status={0}, body={1}")]
    HttpError(u16, String),
}

impl DiskServerError {
    /// HTTP status code the server answered with
    pub fn status_code(&self) -> u16 {
        match self {
            DiskServerError::ApiError(e) => e.status_code(),
            DiskServerError::HttpError(status, _) => *status,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error occurred: {0}")]
    Validation(#[from] ValidationErr),

    #[error("Network error occurred: {0}")]
    Network(#[from] NetworkError),

    #[error("Disk server error occurred: {0}")]
    DiskServer(#[from] DiskServerError),
}

impl From<DiskErrorResponse> for Error {
    fn from(err: DiskErrorResponse) -> Self {
        Error::DiskServer(DiskServerError::ApiError(Box::new(err)))
    }
}

impl Error {
    /// Returns the decoded server error, if this error came from one
    pub fn api_error(&self) -> Option<&DiskErrorResponse> {
        match self {
            Error::DiskServer(DiskServerError::ApiError(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code for errors reported by the server
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::DiskServer(e) => Some(e.status_code()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
