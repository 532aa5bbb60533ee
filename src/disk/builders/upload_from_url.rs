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

//! Builder for UploadFromUrl operation
//!
//! Yandex.Disk REST API: `POST /v1/disk/resources/upload?path=..&url=..`

use crate::disk::client::DiskClient;
use crate::disk::error::ValidationErr;
use crate::disk::header_constants::{PATH, URL};
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use crate::disk::response::UploadFromUrlResponse;
use crate::disk::types::{DiskApi, DiskRequest, RequestTarget, ToDiskRequest};
use crate::disk::utils::check_path;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for UploadFromUrl operation
///
/// Asks the server to fetch a file from the Internet and store it at `path`.
/// The returned link points to the download operation, which can be polled
/// with [`DiskClient::operation_status`].
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
///     .upload_from_url("/Downloads/rfc2616.txt", "https://www.rfc-editor.org/rfc/rfc2616.txt")
///     .build()
///     .send()
///     .await?;
/// println!("operation: {:?}", resp.link().operation());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct UploadFromUrl {
    #[builder(!default)]
    client: DiskClient,
    #[builder(!default, setter(into))]
    path: String,
    #[builder(!default, setter(into))]
    url: String,
    #[builder(default, setter(into, strip_option))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into, strip_option))]
    extra_query_params: Option<Multimap>,
}

impl DiskApi for UploadFromUrl {
    type DiskResponse = UploadFromUrlResponse;
}

/// Builder type for UploadFromUrl
pub type UploadFromUrlBldr = UploadFromUrlBuilder<((DiskClient,), (String,), (String,), (), ())>;

impl ToDiskRequest for UploadFromUrl {
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr> {
        check_path(&self.path)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add(PATH, self.path);
        query_params.add(URL, self.url);

        Ok(DiskRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .target(RequestTarget::endpoint("resources/upload"))
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
