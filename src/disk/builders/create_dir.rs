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

//! Builder for CreateDir operation
//!
//! Yandex.Disk REST API: `PUT /v1/disk/resources?path=..`

use crate::disk::client::DiskClient;
use crate::disk::error::ValidationErr;
use crate::disk::header_constants::PATH;
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use crate::disk::response::CreateDirResponse;
use crate::disk::types::{DiskApi, DiskRequest, RequestTarget, ToDiskRequest};
use crate::disk::utils::check_path;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for CreateDir operation
///
/// Creates an empty directory. The parent directory must already exist.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateDir {
    #[builder(!default)]
    client: DiskClient,
    #[builder(!default, setter(into))]
    path: String,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    extra_query_params: Option<Multimap>,
}

impl DiskApi for CreateDir {
    type DiskResponse = CreateDirResponse;
}

/// Builder type for CreateDir
pub type CreateDirBldr = CreateDirBuilder<((DiskClient,), (String,), (), ())>;

impl ToDiskRequest for CreateDir {
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr> {
        check_path(&self.path)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add(PATH, self.path);

        Ok(DiskRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .target(RequestTarget::endpoint("resources"))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
