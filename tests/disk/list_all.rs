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

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};
use yadisk::disk::client::LIST_ALL_PAGE_SIZE;
use yadisk_common::test_context::TestContext;
use yadisk_common::utils::{dir_json, error_json, files_json};

async fn mount_page(ctx: &TestContext, dir: &str, offset: usize, count: usize) {
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources")))
        .and(query_param("path", dir))
        .and(query_param("limit", "100"))
        .and(query_param("offset", offset.to_string().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(dir_json(
            dir,
            files_json(dir, offset, count),
            LIST_ALL_PAGE_SIZE,
            offset as u64,
        )))
        .expect(1)
        .mount(&ctx.server)
        .await;
}

#[tokio::test]
async fn list_all_collects_every_page() {
    let ctx = TestContext::new().await;
    mount_page(&ctx, "/Big", 0, 100).await;
    mount_page(&ctx, "/Big", 100, 100).await;
    mount_page(&ctx, "/Big", 200, 50).await;

    let list = ctx.client.list_all("/Big").await.unwrap();
    assert_eq!(list.len(), 250);
    assert_eq!(list.limit, 250);
    assert_eq!(list.offset, 0);
    assert_eq!(list.items[0].path, "disk:/Big/file0000.txt");
    assert_eq!(list.items[249].path, "disk:/Big/file0249.txt");
}

#[tokio::test]
async fn list_all_exact_multiple_fetches_one_more_page() {
    let ctx = TestContext::new().await;
    mount_page(&ctx, "/Exact", 0, 100).await;
    mount_page(&ctx, "/Exact", 100, 0).await;

    let list = ctx.client.list_all("/Exact").await.unwrap();
    assert_eq!(list.len(), 100);
    assert_eq!(list.limit, 100);
    assert_eq!(ctx.server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn list_all_empty_directory() {
    let ctx = TestContext::new().await;
    mount_page(&ctx, "/Nothing", 0, 0).await;

    let list = ctx.client.list_all("/Nothing").await.unwrap();
    assert!(list.is_empty());
    assert_eq!(list.limit, 0);
    assert_eq!(list.offset, 0);
}

#[tokio::test]
async fn list_all_aborts_on_error() {
    let ctx = TestContext::new().await;
    mount_page(&ctx, "/Flaky", 0, 100).await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources")))
        .and(query_param("offset", "100"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(error_json("DiskUnavailable", "Try later.")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.list_all("/Flaky").await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
}
