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

//! Builder for DeleteResource operation
//!
//! Yandex.Disk REST API: `DELETE /v1/disk/resources?path=..&permanently=..`

use crate::disk::client::DiskClient;
use crate::disk::error::ValidationErr;
use crate::disk::header_constants::{PATH, PERMANENTLY};
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use crate::disk::response::DeleteResourceResponse;
use crate::disk::types::{DiskApi, DiskRequest, RequestTarget, ToDiskRequest};
use crate::disk::utils::check_path;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for DeleteResource operation
///
/// Moves a resource to the trash, or removes it for good with
/// `permanently(true)`. Deleting a non-empty directory returns an operation
/// link; everything else completes immediately.
///
/// # Example
///
/// ```no_run
/// use yadisk::disk::{DiskClient, HasOptionalLink};
/// use yadisk::disk::types::DiskApi;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DiskClient::builder().token("my-oauth-token").build()?;
/// let resp = client.delete("/Drafts").permanently(true).build().send().await?;
/// match resp.link() {
///     Some(op) => println!("deleting in background: {:?}", op.operation()),
///     None => println!("deleted"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteResource {
    #[builder(!default)]
    client: DiskClient,
    #[builder(!default, setter(into))]
    path: String,
    #[builder(default)]
    permanently: bool,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    extra_query_params: Option<Multimap>,
}

impl DiskApi for DeleteResource {
    type DiskResponse = DeleteResourceResponse;
}

/// Builder type for DeleteResource
pub type DeleteResourceBldr = DeleteResourceBuilder<((DiskClient,), (String,), (), (), ())>;

impl ToDiskRequest for DeleteResource {
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr> {
        check_path(&self.path)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add(PATH, self.path);
        query_params.add(PERMANENTLY, self.permanently.to_string());

        Ok(DiskRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .target(RequestTarget::endpoint("resources"))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
