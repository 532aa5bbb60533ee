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

//! Response type for ListResources operation
//!
//! The server describes the requested path as a resource; for directories the
//! requested page of children is embedded in its `_embedded` field:
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `type` | `string` | `dir` or `file` |
//! | `_embedded.items` | `array[Resource]` | children of the page |
//! | `_embedded.limit` | `integer` | requested page size |
//! | `_embedded.offset` | `integer` | offset of the page |
//! | `_embedded.total` | `integer` | number of children in the directory |

use crate::disk::error::{Error, NetworkError, ValidationErr};
use crate::disk::types::{DiskRequest, FromDiskResponse, Resource, ResourceList};
use crate::impl_has_disk_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Response from ListResources operation
///
/// # Available Fields
///
/// - [`list()`](Self::list) - the page of children
/// - [`items()`](Self::items) - shortcut for the children themselves
/// - [`directory()`](Self::directory) - metadata of the listed directory
#[derive(Clone, Debug)]
pub struct ListResourcesResponse {
    request: DiskRequest,
    headers: HeaderMap,
    body: Bytes,
    directory: Resource,
    list: ResourceList,
}

impl ListResourcesResponse {
    pub fn list(&self) -> &ResourceList {
        &self.list
    }

    pub fn items(&self) -> &[Resource] {
        &self.list.items
    }

    /// The listed directory, without its embedded children
    pub fn directory(&self) -> &Resource {
        &self.directory
    }

    pub fn into_list(self) -> ResourceList {
        self.list
    }
}

impl_has_disk_fields!(ListResourcesResponse);

#[async_trait]
impl FromDiskResponse for ListResourcesResponse {
    async fn from_disk_response(
        request: DiskRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = std::mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::ReqwestError)?;

        let mut directory: Resource =
            serde_json::from_slice(&body).map_err(ValidationErr::JsonError)?;
        if !directory.is_dir() {
            return Err(ValidationErr::NotADirectory {
                path: directory.path,
            }
            .into());
        }
        let list = directory.take_children().unwrap_or_else(|| {
            log::debug!("no embedded listing for '{}'", directory.path);
            ResourceList {
                limit: requested_u64(&request, crate::disk::header_constants::LIMIT),
                offset: requested_u64(&request, crate::disk::header_constants::OFFSET),
                ..Default::default()
            }
        });

        Ok(Self {
            request,
            headers,
            body,
            directory,
            list,
        })
    }
}

fn requested_u64(request: &DiskRequest, key: &str) -> u64 {
    request
        .query_params
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}
