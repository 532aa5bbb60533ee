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

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};
use yadisk::disk::HasDiskFields;
use yadisk::disk::types::DiskApi;
use yadisk_common::test_context::TestContext;

#[tokio::test]
async fn stats() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "trash_size": 1000,
            "total_space": 10000,
            "used_space": 2500,
            "system_folders": { "downloads": "disk:/Downloads/" }
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx.client.stats().build().send().await.unwrap();
    assert!(!resp.body().is_empty());

    let stats = resp.into_stats();
    assert_eq!(stats.total_space, 10000);
    assert_eq!(stats.used_space, 2500);
    assert_eq!(stats.trash_size, 1000);
    assert_eq!(stats.free_space(), 7500);
    assert_eq!(
        stats.system_folders.get("downloads").map(String::as_str),
        Some("disk:/Downloads/")
    );
}
