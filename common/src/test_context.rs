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
use wiremock::MockServer;

/// OAuth token the test client authenticates with
pub const TEST_TOKEN: &str = "test-token";

/// Path prefix of the API on the mock server
pub const API_PREFIX: &str = "/v1/disk";

/// A mock Disk server together with a client pointed at it
pub struct TestContext {
    pub server: MockServer,
    pub client: DiskClient,
}

impl TestContext {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = format!("{}{API_PREFIX}/", server.uri());
        log::debug!("mock server at {base_url}");
        let client = DiskClient::builder()
            .base_url(base_url)
            .token(TEST_TOKEN)
            .build()
            .unwrap();
        Self { server, client }
    }

    /// Absolute path of an API endpoint on the mock server, e.g. `/v1/disk/resources`
    pub fn endpoint(&self, endpoint: &str) -> String {
        if endpoint.is_empty() {
            format!("{API_PREFIX}/")
        } else {
            format!("{API_PREFIX}/{endpoint}")
        }
    }

    /// Absolute URL on the mock server, used as a link href
    pub fn href(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }

    /// Href of an operation link with the given id
    pub fn operation_href(&self, id: &str) -> String {
        self.href(&format!("{API_PREFIX}/operations/{id}"))
    }
}
