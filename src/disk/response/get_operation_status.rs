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

//! Response type for GetOperationStatus operation
//!
//! The server answers with `{"status": "success" | "failure" | "in-progress"}`.

use crate::disk::error::{Error, NetworkError, ValidationErr};
use crate::disk::types::{DiskRequest, FromDiskResponse, OperationStatus};
use crate::impl_has_disk_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;

#[derive(Deserialize)]
struct StatusBody {
    status: String,
}

/// Response from GetOperationStatus operation
#[derive(Clone, Debug)]
pub struct GetOperationStatusResponse {
    request: DiskRequest,
    headers: HeaderMap,
    body: Bytes,
    status: OperationStatus,
}

impl GetOperationStatusResponse {
    pub fn status(&self) -> OperationStatus {
        self.status
    }
}

impl_has_disk_fields!(GetOperationStatusResponse);

#[async_trait]
impl FromDiskResponse for GetOperationStatusResponse {
    async fn from_disk_response(
        request: DiskRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = std::mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::ReqwestError)?;
        let parsed: StatusBody = serde_json::from_slice(&body).map_err(ValidationErr::JsonError)?;
        let status: OperationStatus = parsed.status.parse()?;

        Ok(Self {
            request,
            headers,
            body,
            status,
        })
    }
}
