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

//! Builder for ClearTrash operation
//!
//! Yandex.Disk REST API: `DELETE /v1/disk/trash/resources`

use crate::disk::client::DiskClient;
use crate::disk::error::ValidationErr;
use crate::disk::multimap_ext::Multimap;
use crate::disk::response::ClearTrashResponse;
use crate::disk::types::{DiskApi, DiskRequest, RequestTarget, ToDiskRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for ClearTrash operation
///
/// Removes everything from the trash. Usually answered with an operation link.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ClearTrash {
    #[builder(!default)]
    client: DiskClient,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    extra_query_params: Option<Multimap>,
}

impl DiskApi for ClearTrash {
    type DiskResponse = ClearTrashResponse;
}

/// Builder type for ClearTrash
pub type ClearTrashBldr = ClearTrashBuilder<((DiskClient,), (), ())>;

impl ToDiskRequest for ClearTrash {
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr> {
        Ok(DiskRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .target(RequestTarget::endpoint("trash/resources"))
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
