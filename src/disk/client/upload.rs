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

//! Client methods for uploading files

use crate::disk::builders::{GetUploadLink, GetUploadLinkBldr};
use crate::disk::client::DiskClient;
use crate::disk::content::UploadContent;
use crate::disk::error::{Error, NetworkError, ValidationErr};
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use crate::disk::response_traits::HasLink;
use crate::disk::types::{DiskApi, RequestTarget};
use http::StatusCode;
use std::path::Path;

impl DiskClient {
    /// Requests a link to upload a file to `path`
    ///
    /// An existing file is overwritten unless `.overwrite(false)` is set.
    pub fn get_upload_link<S: Into<String>>(&self, path: S) -> GetUploadLinkBldr {
        GetUploadLink::builder().client(self.clone()).path(path)
    }

    /// Uploads `content` to `path`, overwriting an existing file
    ///
    /// Requests an upload link, then sends the content to it. Only
    /// `201 Created` counts as success; any other success status is reported
    /// as [`ValidationErr::UnexpectedStatus`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: yadisk::disk::DiskClient) -> Result<(), Box<dyn std::error::Error>> {
    /// client.upload("/notes.txt", "hello from rust").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload<S, C>(&self, path: S, content: C) -> Result<(), Error>
    where
        S: Into<String>,
        C: Into<UploadContent>,
    {
        let (body, size) = content
            .into()
            .into_body()
            .await
            .map_err(NetworkError::IoError)?;

        let link = self.get_upload_link(path).build().send().await?.into_link();

        let mut headers = Multimap::new();
        if body.as_bytes().is_none()
            && let Some(len) = size.value()
        {
            headers.add(http::header::CONTENT_LENGTH.as_str(), len.to_string());
        }

        let resp = self
            .execute(
                link.method().clone(),
                &RequestTarget::href(link.href()),
                &headers,
                &Multimap::new(),
                Some(body),
            )
            .await?;

        match resp.status() {
            StatusCode::CREATED => Ok(()),
            other => Err(ValidationErr::UnexpectedStatus {
                expected: "201 Created",
                got: other.as_u16(),
            }
            .into()),
        }
    }

    /// Uploads a local file to `path`, streaming it from disk
    pub async fn upload_file<S: Into<String>>(&self, path: S, file_path: &Path) -> Result<(), Error> {
        self.upload(path, file_path).await
    }
}
