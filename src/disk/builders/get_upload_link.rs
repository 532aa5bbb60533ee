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

//! Builder for GetUploadLink operation
//!
//! Yandex.Disk REST API: `GET /v1/disk/resources/upload?path=..&overwrite=..`

use crate::disk::client::DiskClient;
use crate::disk::error::ValidationErr;
use crate::disk::header_constants::{OVERWRITE, PATH};
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use crate::disk::response::GetUploadLinkResponse;
use crate::disk::types::{DiskApi, DiskRequest, RequestTarget, ToDiskRequest};
use crate::disk::utils::check_path;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for GetUploadLink operation
///
/// Requests the URL file content has to be sent to. Existing files are
/// overwritten unless `overwrite(false)` is set.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetUploadLink {
    #[builder(!default)]
    client: DiskClient,
    #[builder(!default, setter(into))]
    path: String,
    #[builder(default = true)]
    overwrite: bool,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    extra_query_params: Option<Multimap>,
}

impl DiskApi for GetUploadLink {
    type DiskResponse = GetUploadLinkResponse;
}

/// Builder type for GetUploadLink
pub type GetUploadLinkBldr = GetUploadLinkBuilder<((DiskClient,), (String,), (), (), ())>;

impl ToDiskRequest for GetUploadLink {
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr> {
        check_path(&self.path)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add(PATH, self.path);
        query_params.add(OVERWRITE, self.overwrite.to_string());

        Ok(DiskRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .target(RequestTarget::endpoint("resources/upload"))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
