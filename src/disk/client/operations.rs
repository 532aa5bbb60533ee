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

//! Client methods for asynchronous operations

use crate::disk::builders::{GetOperationStatus, GetOperationStatusBldr};
use crate::disk::client::DiskClient;
use crate::disk::error::{Error, ValidationErr};
use crate::disk::types::{DiskApi, Link, OperationStatus};
use std::time::Duration;
use tokio::time::Instant;

impl DiskClient {
    /// Queries the status of the operation `link` points to
    ///
    /// Fails with [`ValidationErr::NotAnOperation`] without contacting the
    /// server when the link points to a resource.
    pub fn operation_status(&self, link: Link) -> GetOperationStatusBldr {
        GetOperationStatus::builder().client(self.clone()).link(link)
    }

    /// Polls the operation `link` points to until it finishes
    ///
    /// The status is queried every `interval`. Returns the final status, or
    /// [`ValidationErr::OperationTimeout`] once `timeout` has elapsed while the
    /// operation is still in progress.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use yadisk::disk::HasLink;
    /// use yadisk::disk::types::DiskApi;
    ///
    /// # async fn example(client: yadisk::disk::DiskClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let link = client.copy("/Photos", "/Backup/Photos").build().send().await?.into_link();
    /// if link.is_operation() {
    ///     let status = client
    ///         .wait_for_operation(&link, Duration::from_secs(1), Duration::from_secs(60))
    ///         .await?;
    ///     println!("copy finished: {status}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn wait_for_operation(
        &self,
        link: &Link,
        interval: Duration,
        timeout: Duration,
    ) -> Result<OperationStatus, Error> {
        let start = Instant::now();
        loop {
            let status = self
                .operation_status(link.clone())
                .build()
                .send()
                .await?
                .status();
            if status.is_finished() {
                return Ok(status);
            }

            let elapsed = start.elapsed();
            if elapsed.saturating_add(interval) > timeout {
                return Err(ValidationErr::OperationTimeout {
                    id: link.operation().unwrap_or_default().to_string(),
                    elapsed,
                }
                .into());
            }
            log::trace!("operation still in progress after {elapsed:?}");
            tokio::time::sleep(interval).await;
        }
    }
}
