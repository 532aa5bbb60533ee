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

//! Builder for ListResources operation
//!
//! Yandex.Disk REST API: `GET /v1/disk/resources?path=..&offset=..&limit=..&sort=..`

use crate::disk::client::DiskClient;
use crate::disk::error::ValidationErr;
use crate::disk::header_constants::{LIMIT, OFFSET, PATH, SORT};
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use crate::disk::response::ListResourcesResponse;
use crate::disk::types::{DiskApi, DiskRequest, RequestTarget, ToDiskRequest};
use crate::disk::utils::check_path;
use http::Method;
use typed_builder::TypedBuilder;

/// Page size used when no limit is given
pub const DEFAULT_LIST_LIMIT: u64 = 20;

/// Sort key used when none is given
pub const DEFAULT_LIST_SORT: &str = "name";

/// Argument builder for ListResources operation
///
/// Lists one page of a directory. The request fails with
/// [`ValidationErr::NotADirectory`] when `path` points to a file.
///
/// # Example
///
/// ```no_run
/// use yadisk::disk::DiskClient;
/// use yadisk::disk::types::DiskApi;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DiskClient::builder().token("my-oauth-token").build()?;
///
/// let page = client
///     .list("/Photos")
///     .offset(40)
///     .limit(20)
///     .build()
///     .send()
///     .await?;
///
/// for item in page.items() {
///     println!("{} {}", item.resource_type, item.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListResources {
    #[builder(!default)]
    client: DiskClient,
    #[builder(!default, setter(into))]
    path: String,
    #[builder(default)]
    offset: u64,
    #[builder(default = DEFAULT_LIST_LIMIT)]
    limit: u64,
    #[builder(default = DEFAULT_LIST_SORT.to_string(), setter(into))]
    sort: String,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    extra_query_params: Option<Multimap>,
}

impl DiskApi for ListResources {
    type DiskResponse = ListResourcesResponse;
}

/// Builder type for ListResources
pub type ListResourcesBldr = ListResourcesBuilder<((DiskClient,), (String,), (), (), (), (), ())>;

impl ToDiskRequest for ListResources {
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr> {
        check_path(&self.path)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add(PATH, self.path);
        query_params.add(OFFSET, self.offset.to_string());
        query_params.add(LIMIT, self.limit.to_string());
        query_params.add(SORT, self.sort);

        Ok(DiskRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .target(RequestTarget::endpoint("resources"))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
