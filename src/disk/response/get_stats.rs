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

//! Response type for GetStats operation

use crate::disk::error::{Error, NetworkError, ValidationErr};
use crate::disk::types::{DiskRequest, FromDiskResponse, Stats};
use crate::impl_has_disk_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Response from GetStats operation
///
/// # Available Fields
///
/// - [`stats()`](Self::stats) - decoded account statistics
#[derive(Clone, Debug)]
pub struct GetStatsResponse {
    request: DiskRequest,
    headers: HeaderMap,
    body: Bytes,
    stats: Stats,
}

impl GetStatsResponse {
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn into_stats(self) -> Stats {
        self.stats
    }
}

impl_has_disk_fields!(GetStatsResponse);

#[async_trait]
impl FromDiskResponse for GetStatsResponse {
    async fn from_disk_response(
        request: DiskRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = std::mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::ReqwestError)?;
        let stats: Stats = serde_json::from_slice(&body).map_err(ValidationErr::JsonError)?;

        Ok(Self {
            request,
            headers,
            body,
            stats,
        })
    }
}
