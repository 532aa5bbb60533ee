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
use yadisk::disk::error::{Error, ValidationErr};
use yadisk::disk::types::{DiskApi, ResourceType};
use yadisk_common::test_context::TestContext;
use yadisk_common::utils::{dir_json, file_json, files_json};

#[tokio::test]
async fn list_uses_default_paging() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources")))
        .and(query_param("path", "/Docs"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "20"))
        .and(query_param("sort", "name"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(dir_json("/Docs", files_json("/Docs", 0, 3), 20, 0)),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx.client.list("/Docs").build().send().await.unwrap();
    assert_eq!(resp.directory().name, "Docs");
    assert!(resp.directory().is_dir());

    let list = resp.list();
    assert_eq!(list.len(), 3);
    assert_eq!(list.limit, 20);
    assert_eq!(list.offset, 0);
    assert_eq!(list.path.as_deref(), Some("disk:/Docs"));

    let first = &resp.items()[0];
    assert_eq!(first.resource_type, ResourceType::File);
    assert_eq!(first.path, "disk:/Docs/file0000.txt");
    assert!(first.hash().is_some());
    assert!(first.modified.is_some());
}

#[tokio::test]
async fn list_with_custom_paging() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources")))
        .and(query_param("path", "/Фото 2024"))
        .and(query_param("offset", "40"))
        .and(query_param("limit", "5"))
        .and(query_param("sort", "-modified"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dir_json(
            "/Фото 2024",
            files_json("/Фото 2024", 40, 5),
            5,
            40,
        )))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let list = ctx
        .client
        .list("/Фото 2024")
        .offset(40)
        .limit(5)
        .sort("-modified")
        .build()
        .send()
        .await
        .unwrap()
        .into_list();
    assert_eq!(list.len(), 5);
    assert_eq!(list.offset, 40);
    assert_eq!(list.items[0].size(), 40);
}

#[tokio::test]
async fn list_file_is_not_a_directory() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources")))
        .respond_with(ResponseTemplate::new(200).set_body_json(file_json("/Docs/a.txt", 12)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.list("/Docs/a.txt").build().send().await.unwrap_err();
    match err {
        Error::Validation(ValidationErr::NotADirectory { path }) => {
            assert_eq!(path, "disk:/Docs/a.txt")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_directory_without_embedded_children() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "dir",
            "name": "Empty",
            "path": "disk:/Empty"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let list = ctx
        .client
        .list("/Empty")
        .limit(7)
        .build()
        .send()
        .await
        .unwrap()
        .into_list();
    assert!(list.is_empty());
    assert_eq!(list.limit, 7);
    assert_eq!(list.offset, 0);
}

#[tokio::test]
async fn list_empty_path_is_rejected() {
    let ctx = TestContext::new().await;
    let err = ctx.client.list("").build().send().await.unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::EmptyPath)));
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}
