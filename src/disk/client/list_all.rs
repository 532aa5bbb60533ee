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

//! Client method listing a whole directory

use crate::disk::client::DiskClient;
use crate::disk::error::Error;
use crate::disk::types::{DiskApi, ResourceList};

/// Page size used by [`DiskClient::list_all`]
pub const LIST_ALL_PAGE_SIZE: u64 = 100;

impl DiskClient {
    /// Lists every child of a directory, page by page
    ///
    /// Pages of [`LIST_ALL_PAGE_SIZE`] items are requested until a page comes
    /// back short or empty. The returned list has `offset` 0 and a `limit`
    /// equal to the number of items. An error on any page aborts the listing
    /// and no partial result is returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: yadisk::disk::DiskClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let all = client.list_all("/Photos").await?;
    /// for item in &all.items {
    ///     println!("{}", item.path);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_all<S: Into<String>>(&self, path: S) -> Result<ResourceList, Error> {
        let path: String = path.into();
        let mut items = Vec::new();
        let mut offset: u64 = 0;

        loop {
            let page = self
                .list(path.clone())
                .offset(offset)
                .limit(LIST_ALL_PAGE_SIZE)
                .build()
                .send()
                .await?
                .into_list();

            let count = page.items.len() as u64;
            log::trace!("listed {count} items of '{path}' at offset {offset}");
            items.extend(page.items);

            if count == 0 || count < LIST_ALL_PAGE_SIZE {
                break;
            }
            offset += LIST_ALL_PAGE_SIZE;
        }

        Ok(ResourceList::accumulated(items))
    }
}
