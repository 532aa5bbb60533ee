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

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};
use yadisk::disk::error::{Error, ValidationErr};
use yadisk::disk::types::DiskApi;
use yadisk::disk::{HasLink, HasOptionalLink};
use yadisk_common::test_context::TestContext;
use yadisk_common::utils::link_json;

#[tokio::test]
async fn trash_delete() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(ctx.endpoint("trash/resources")))
        .and(query_param("path", "trash:/old.txt"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .trash_delete("trash:/old.txt")
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.link().is_none());
}

#[tokio::test]
async fn trash_delete_empty_path_is_rejected() {
    let ctx = TestContext::new().await;

    let err = ctx.client.trash_delete("").build().send().await.unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::EmptyPath)));
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn trash_delete_all() {
    let ctx = TestContext::new().await;
    let href = ctx.operation_href("op-clear");
    Mock::given(method("DELETE"))
        .and(path(ctx.endpoint("trash/resources")))
        .and(query_param_is_missing("path"))
        .respond_with(ResponseTemplate::new(202).set_body_json(link_json(&href, "GET")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let link = ctx
        .client
        .trash_delete_all()
        .build()
        .send()
        .await
        .unwrap()
        .into_link()
        .unwrap();
    assert!(link.is_operation());
}

#[tokio::test]
async fn trash_restore_with_defaults() {
    let ctx = TestContext::new().await;
    let href = ctx.href("/v1/disk/resources?path=disk%3A%2Fa.txt");
    Mock::given(method("PUT"))
        .and(path(ctx.endpoint("trash/resources/restore")))
        .and(query_param("path", "trash:/a.txt"))
        .and(query_param("overwrite", "false"))
        .and(query_param_is_missing("name"))
        .respond_with(ResponseTemplate::new(201).set_body_json(link_json(&href, "GET")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .trash_restore("trash:/a.txt")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.link().href(), href);
}

#[tokio::test]
async fn trash_restore_under_new_name() {
    let ctx = TestContext::new().await;
    let href = ctx.href("/v1/disk/resources?path=disk%3A%2Fb.txt");
    Mock::given(method("PUT"))
        .and(path(ctx.endpoint("trash/resources/restore")))
        .and(query_param("name", "b.txt"))
        .and(query_param("overwrite", "true"))
        .respond_with(ResponseTemplate::new(201).set_body_json(link_json(&href, "GET")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .trash_restore("trash:/a.txt")
        .name("b.txt")
        .overwrite(true)
        .build()
        .send()
        .await
        .unwrap();
}
