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

//! Client method for DeleteResource operation

use crate::disk::builders::{DeleteResource, DeleteResourceBldr};
use crate::disk::client::DiskClient;

impl DiskClient {
    /// Deletes the resource at `path`
    ///
    /// The resource goes to the trash unless `.permanently(true)` is set.
    /// The response carries an operation link when the server deletes
    /// asynchronously.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use yadisk::disk::HasOptionalLink;
    /// use yadisk::disk::types::DiskApi;
    ///
    /// # async fn example(client: yadisk::disk::DiskClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let resp = client.delete("/old").permanently(true).build().send().await?;
    /// if let Some(link) = resp.link() {
    ///     println!("deleting in background: {}", link.href());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn delete<S: Into<String>>(&self, path: S) -> DeleteResourceBldr {
        DeleteResource::builder().client(self.clone()).path(path)
    }
}
