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

//! Builder for CopyResource operation
//!
//! Yandex.Disk REST API: `POST /v1/disk/resources/copy?from=..&path=..&overwrite=..`

use crate::disk::client::DiskClient;
use crate::disk::error::ValidationErr;
use crate::disk::header_constants::{FROM, OVERWRITE, PATH};
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use crate::disk::response::CopyResourceResponse;
use crate::disk::types::{DiskApi, DiskRequest, RequestTarget, ToDiskRequest};
use crate::disk::utils::check_path;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for CopyResource operation
///
/// Copies the resource at `from` to `path`. Files and empty directories are
/// copied synchronously and the link points to the new resource; non-empty
/// directories are copied by an asynchronous operation.
///
/// # Example
///
/// ```no_run
/// use yadisk::disk::{DiskClient, HasLink};
/// use yadisk::disk::types::DiskApi;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DiskClient::builder().token("my-oauth-token").build()?;
/// let link = client
///     .copy("/Photos/2023", "/Backup/Photos-2023")
///     .overwrite(false)
///     .build()
///     .send()
///     .await?
///     .into_link();
/// if let Some(id) = link.operation() {
///     println!("copying in background, operation {id}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct CopyResource {
    #[builder(!default)]
    client: DiskClient,
    #[builder(!default, setter(into))]
    from: String,
    #[builder(!default, setter(into))]
    path: String,
    #[builder(default = true)]
    overwrite: bool,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    extra_query_params: Option<Multimap>,
}

impl DiskApi for CopyResource {
    type DiskResponse = CopyResourceResponse;
}

/// Builder type for CopyResource
pub type CopyResourceBldr =
    CopyResourceBuilder<((DiskClient,), (String,), (String,), (), (), ())>;

impl ToDiskRequest for CopyResource {
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr> {
        check_path(&self.from)?;
        check_path(&self.path)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add(FROM, self.from);
        query_params.add(PATH, self.path);
        query_params.add(OVERWRITE, self.overwrite.to_string());

        Ok(DiskRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .target(RequestTarget::endpoint("resources/copy"))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
