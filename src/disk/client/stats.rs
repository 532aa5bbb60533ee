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

//! Client method for GetStats operation

use crate::disk::builders::{GetStats, GetStatsBldr};
use crate::disk::client::DiskClient;

impl DiskClient {
    /// Retrieves disk space statistics of the account
    ///
    /// # Example
    ///
    /// ```no_run
    /// use yadisk::disk::DiskClient;
    /// use yadisk::disk::types::DiskApi;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = DiskClient::new("my-oauth-token")?;
    /// let resp = client.stats().build().send().await?;
    /// println!("free: {} bytes", resp.stats().free_space());
    /// # Ok(())
    /// # }
    /// ```
    pub fn stats(&self) -> GetStatsBldr {
        GetStats::builder().client(self.clone())
    }
}
