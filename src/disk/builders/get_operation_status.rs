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

//! Builder for GetOperationStatus operation
//!
//! Yandex.Disk REST API: `GET /v1/disk/operations?id=..`

use crate::disk::client::DiskClient;
use crate::disk::error::ValidationErr;
use crate::disk::header_constants::ID;
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use crate::disk::response::GetOperationStatusResponse;
use crate::disk::types::{DiskApi, DiskRequest, Link, RequestTarget, ToDiskRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for GetOperationStatus operation
///
/// Queries the status of the asynchronous operation a link points to. A link
/// to a plain resource is rejected with [`ValidationErr::NotAnOperation`]
/// before anything is sent.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetOperationStatus {
    #[builder(!default)]
    client: DiskClient,
    #[builder(!default)]
    link: Link,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    extra_query_params: Option<Multimap>,
}

impl DiskApi for GetOperationStatus {
    type DiskResponse = GetOperationStatusResponse;
}

/// Builder type for GetOperationStatus
pub type GetOperationStatusBldr = GetOperationStatusBuilder<((DiskClient,), (Link,), (), ())>;

impl ToDiskRequest for GetOperationStatus {
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr> {
        let id = self
            .link
            .operation()
            .ok_or_else(|| ValidationErr::NotAnOperation {
                href: self.link.href().to_string(),
            })?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add(ID, id);

        Ok(DiskRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .target(RequestTarget::endpoint("operations"))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
