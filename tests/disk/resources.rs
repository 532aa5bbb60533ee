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
use yadisk::disk::types::{DiskApi, LinkTarget};
use yadisk::disk::{HasLink, HasOptionalLink};
use yadisk_common::test_context::TestContext;
use yadisk_common::utils::{error_json, link_json};

#[tokio::test]
async fn copy_returns_resource_link() {
    let ctx = TestContext::new().await;
    let href = ctx.href("/v1/disk/resources?path=disk%3A%2FBackup%2Fa.txt");
    Mock::given(method("POST"))
        .and(path(ctx.endpoint("resources/copy")))
        .and(query_param("from", "/a.txt"))
        .and(query_param("path", "/Backup/a.txt"))
        .and(query_param("overwrite", "true"))
        .respond_with(ResponseTemplate::new(201).set_body_json(link_json(&href, "GET")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .copy("/a.txt", "/Backup/a.txt")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.link().target(), &LinkTarget::Resource);
    assert_eq!(resp.link().href(), href);
}

#[tokio::test]
async fn copy_directory_starts_operation() {
    let ctx = TestContext::new().await;
    let href = ctx.operation_href("op-copy-1");
    Mock::given(method("POST"))
        .and(path(ctx.endpoint("resources/copy")))
        .respond_with(ResponseTemplate::new(202).set_body_json(link_json(&href, "GET")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let link = ctx
        .client
        .copy("/Photos", "/Backup/Photos")
        .build()
        .send()
        .await
        .unwrap()
        .into_link();
    assert_eq!(link.target(), &LinkTarget::Operation("op-copy-1".into()));
}

#[tokio::test]
async fn move_without_overwrite() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(ctx.endpoint("resources/move")))
        .and(query_param("from", "/draft.md"))
        .and(query_param("path", "/final.md"))
        .and(query_param("overwrite", "false"))
        .respond_with(ResponseTemplate::new(409).set_body_json(error_json(
            "DiskResourceAlreadyExistsError",
            "Resource \"disk:/final.md\" already exists.",
        )))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .move_resource("/draft.md", "/final.md")
        .overwrite(false)
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(409));
    assert_eq!(
        err.api_error().unwrap().error(),
        "DiskResourceAlreadyExistsError"
    );
}

#[tokio::test]
async fn mkdir() {
    let ctx = TestContext::new().await;
    let href = ctx.href("/v1/disk/resources?path=disk%3A%2FNew");
    Mock::given(method("PUT"))
        .and(path(ctx.endpoint("resources")))
        .and(query_param("path", "/New"))
        .respond_with(ResponseTemplate::new(201).set_body_json(link_json(&href, "GET")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx.client.mkdir("/New").build().send().await.unwrap();
    assert!(!resp.link().is_operation());
}

#[tokio::test]
async fn delete_synchronously() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(ctx.endpoint("resources")))
        .and(query_param("path", "/old.txt"))
        .and(query_param("permanently", "false"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx.client.delete("/old.txt").build().send().await.unwrap();
    assert!(resp.link().is_none());
}

#[tokio::test]
async fn delete_permanently_starts_operation() {
    let ctx = TestContext::new().await;
    let href = ctx.operation_href("op-delete-7");
    Mock::given(method("DELETE"))
        .and(path(ctx.endpoint("resources")))
        .and(query_param("permanently", "true"))
        .respond_with(ResponseTemplate::new(202).set_body_json(link_json(&href, "GET")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let link = ctx
        .client
        .delete("/Archive")
        .permanently(true)
        .build()
        .send()
        .await
        .unwrap()
        .into_link()
        .unwrap();
    assert_eq!(link.operation(), Some("op-delete-7"));
}

#[tokio::test]
async fn delete_with_unexpected_success_status() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(ctx.endpoint("resources")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.delete("/a").build().send().await.unwrap_err();
    assert!(
        matches!(
            err,
            Error::Validation(ValidationErr::UnexpectedStatus { got: 200, .. })
        ),
        "{err:?}"
    );
}

#[tokio::test]
async fn delete_with_error_object_in_success_status() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(ctx.endpoint("resources")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(error_json("DiskLockedError", "Locked.")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.delete("/a").build().send().await.unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.error(), "DiskLockedError");
    assert_eq!(api.status_code(), 200);
}

#[tokio::test]
async fn templated_link_is_rejected() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path(ctx.endpoint("resources")))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "href": "https://example.com/resources{?path}",
            "method": "GET",
            "templated": true
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.mkdir("/x").build().send().await.unwrap_err();
    assert!(
        matches!(err, Error::Validation(ValidationErr::TemplatedLink { .. })),
        "{err:?}"
    );
}
