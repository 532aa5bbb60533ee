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
use yadisk::disk::error::{DiskServerError, Error};
use yadisk::disk::types::DiskApi;
use yadisk_common::test_context::TestContext;
use yadisk_common::utils::error_json;

#[tokio::test]
async fn api_error_is_decoded() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources")))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(error_json("DiskNotFoundError", "Resource not found.")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.list("/missing").build().send().await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    let api = err.api_error().unwrap();
    assert_eq!(api.error(), "DiskNotFoundError");
    assert_eq!(api.description(), "Resource not found.");
    assert_eq!(api.status_code(), 404);
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("")))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.stats().build().send().await.unwrap_err();
    match err {
        Error::DiskServer(DiskServerError::HttpError(status, body)) => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = yadisk::disk::DiskClient::builder()
        .base_url("http://127.0.0.1:1/v1/disk/")
        .token("t")
        .build()
        .unwrap();

    let err = client.stats().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)), "{err:?}");
    assert_eq!(err.status_code(), None);
}
