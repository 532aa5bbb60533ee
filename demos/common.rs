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

use yadisk::disk::DiskClient;
use yadisk::disk::client::DiskClientBuilder;

/// Creates a client from `YADISK_TOKEN` (and optionally `YADISK_BASE_URL`)
pub fn create_client_from_env() -> Result<DiskClient, Box<dyn std::error::Error + Send + Sync>> {
    let client = DiskClientBuilder::from_env()
        .app_info("yadisk-demos", env!("CARGO_PKG_VERSION"))
        .build()?;
    Ok(client)
}
