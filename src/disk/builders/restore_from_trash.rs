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

//! Builder for RestoreFromTrash operation
//!
//! Yandex.Disk REST API: `PUT /v1/disk/trash/resources/restore?path=..&name=..&overwrite=..`

use crate::disk::client::DiskClient;
use crate::disk::error::ValidationErr;
use crate::disk::header_constants::{NAME, OVERWRITE, PATH};
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use crate::disk::response::RestoreFromTrashResponse;
use crate::disk::types::{DiskApi, DiskRequest, RequestTarget, ToDiskRequest};
use crate::disk::utils::check_path;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for RestoreFromTrash operation
///
/// Restores a resource from the trash to the location it was deleted from,
/// or under a new `name`. Restoring never overwrites an existing resource
/// unless `overwrite(true)` is set.
///
/// # Example
///
/// ```no_run
/// use yadisk::disk::{DiskClient, HasLink};
/// use yadisk::disk::types::DiskApi;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DiskClient::builder().token("my-oauth-token").build()?;
/// let resp = client
///     .trash_restore("trash:/report.pdf")
///     .name("report-restored.pdf")
///     .build()
///     .send()
///     .await?;
/// println!("restored: {}", resp.link().href());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct RestoreFromTrash {
    #[builder(!default)]
    client: DiskClient,
    #[builder(!default, setter(into))]
    path: String,
    #[builder(default, setter(into, strip_option))]
    name: Option<String>,
    #[builder(default)]
    overwrite: bool,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    extra_query_params: Option<Multimap>,
}

impl DiskApi for RestoreFromTrash {
    type DiskResponse = RestoreFromTrashResponse;
}

/// Builder type for RestoreFromTrash
pub type RestoreFromTrashBldr =
    RestoreFromTrashBuilder<((DiskClient,), (String,), (), (), (), ())>;

impl ToDiskRequest for RestoreFromTrash {
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr> {
        check_path(&self.path)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add(PATH, self.path);
        query_params.add(OVERWRITE, self.overwrite.to_string());
        // An empty name restores under the original name
        query_params.add_opt(NAME, self.name.filter(|n| !n.is_empty()));

        Ok(DiskRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .target(RequestTarget::endpoint("trash/resources/restore"))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
