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

//! Decoded error object returned by the Yandex.Disk API

use crate::disk::error::ValidationErr;
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;

/// Error body as sent by the server: `{"message": .., "description": .., "error": ..}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    error: String,
}

/// DiskErrorResponse is the typed error returned by all API operations
/// when the server answers with a status outside of 200-299.
#[derive(Clone, Debug)]
pub struct DiskErrorResponse {
    status_code: u16,
    message: String,
    description: String,
    error: String,
    headers: HeaderMap,
}

impl DiskErrorResponse {
    pub fn new(
        status_code: u16,
        message: String,
        description: String,
        error: String,
        headers: HeaderMap,
    ) -> Self {
        Self {
            status_code,
            message,
            description,
            error,
            headers,
        }
    }

    /// Decodes a JSON error body and attaches the HTTP status code.
    pub fn new_from_body(
        status_code: u16,
        body: &Bytes,
        headers: HeaderMap,
    ) -> Result<Self, ValidationErr> {
        let parsed: ErrorBody = serde_json::from_slice(body)?;
        Ok(Self {
            status_code,
            message: parsed.message,
            description: parsed.description,
            error: parsed.error,
            headers,
        })
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }
    /// Localized, human readable message
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    /// Machine readable error code, e.g. `DiskNotFoundError`
    pub fn error(&self) -> &str {
        &self.error
    }
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    /// Take ownership of the headers as returned by the server.
    pub fn take_headers(&mut self) -> HeaderMap {
        std::mem::take(&mut self.headers)
    }
}

impl std::fmt::Display for DiskErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status_code, self.description)
    }
}

impl std::error::Error for DiskErrorResponse {}
