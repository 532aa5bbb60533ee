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

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};
use yadisk::disk::DiskClient;
use yadisk::disk::types::DiskApi;
use yadisk::disk::utils::default_user_agent;
use yadisk_common::test_context::{API_PREFIX, TestContext};

#[tokio::test]
async fn standard_headers_are_sent() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("")))
        .and(header("Authorization", "OAuth test-token"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(header("User-Agent", default_user_agent()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_space": 10,
            "used_space": 4
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client.stats().build().send().await.unwrap();
}

#[tokio::test]
async fn app_info_is_appended_to_user_agent() {
    let ctx = TestContext::new().await;
    let client = DiskClient::builder()
        .base_url(format!("{}{API_PREFIX}", ctx.server.uri()))
        .token("another-token")
        .app_info("photo-sync", "3.1")
        .build()
        .unwrap();

    let expected_agent = format!("{} photo-sync/3.1", default_user_agent());
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("")))
        .and(header("Authorization", "OAuth another-token"))
        .and(header("User-Agent", expected_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    client.stats().build().send().await.unwrap();
}

#[tokio::test]
async fn extra_headers_and_query_params_are_sent() {
    use wiremock::matchers::query_param;
    use yadisk::disk::multimap_ext::{Multimap, MultimapExt};

    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("")))
        .and(header("X-Request-Id", "42"))
        .and(query_param("fields", "total_space"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_space": 10
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut headers = Multimap::new();
    headers.add("X-Request-Id", "42");
    let mut query = Multimap::new();
    query.add("fields", "total_space");

    let resp = ctx
        .client
        .stats()
        .extra_headers(headers)
        .extra_query_params(query)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.stats().total_space, 10);
}
