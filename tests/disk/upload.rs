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

use bytes::Bytes;
use futures_util::stream;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};
use yadisk::disk::HasLink;
use yadisk::disk::content::UploadContent;
use yadisk::disk::error::{Error, ValidationErr};
use yadisk::disk::types::DiskApi;
use yadisk_common::test_context::TestContext;
use yadisk_common::utils::{link_json, rand_path};

async fn mount_upload_link(ctx: &TestContext, disk_path: &str, href: &str) {
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources/upload")))
        .and(query_param("path", disk_path))
        .and(query_param("overwrite", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(link_json(href, "PUT")))
        .expect(1)
        .mount(&ctx.server)
        .await;
}

#[tokio::test]
async fn get_upload_link_without_overwrite() {
    let ctx = TestContext::new().await;
    let href = ctx.href("/uploader/target");
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources/upload")))
        .and(query_param("overwrite", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(link_json(&href, "PUT")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let link = ctx
        .client
        .get_upload_link("/new.txt")
        .overwrite(false)
        .build()
        .send()
        .await
        .unwrap()
        .into_link();
    assert_eq!(link.method(), &http::Method::PUT);
    assert!(!link.is_operation());
}

#[tokio::test]
async fn upload_bytes() {
    let ctx = TestContext::new().await;
    mount_upload_link(&ctx, "/hello.txt", &ctx.href("/uploader/hello")).await;
    Mock::given(method("PUT"))
        .and(path("/uploader/hello"))
        .and(header("Authorization", "OAuth test-token"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client.upload("/hello.txt", "hello, world").await.unwrap();

    let requests = ctx.server.received_requests().await.unwrap();
    let put = requests.iter().find(|r| r.method.as_str() == "PUT").unwrap();
    assert_eq!(put.body, b"hello, world");
}

#[tokio::test]
async fn upload_stream_sets_content_length() {
    let ctx = TestContext::new().await;
    mount_upload_link(&ctx, "/stream.bin", &ctx.href("/uploader/stream")).await;
    Mock::given(method("PUT"))
        .and(path("/uploader/stream"))
        .and(header("Content-Length", "10"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let chunks: Vec<std::io::Result<Bytes>> = vec![
        Ok(Bytes::from_static(b"01234")),
        Ok(Bytes::from_static(b"56789")),
    ];
    let content = UploadContent::new_from_stream(stream::iter(chunks), 10u64);
    ctx.client.upload("/stream.bin", content).await.unwrap();

    let requests = ctx.server.received_requests().await.unwrap();
    let put = requests.iter().find(|r| r.method.as_str() == "PUT").unwrap();
    assert_eq!(put.body, b"0123456789");
}

#[tokio::test]
async fn upload_file_from_disk() {
    let ctx = TestContext::new().await;
    let local = std::env::temp_dir().join(format!("yadisk{}.txt", rand_path().replace('/', "_")));
    std::fs::write(&local, b"file content").unwrap();

    mount_upload_link(&ctx, "/docs/file.txt", &ctx.href("/uploader/file")).await;
    Mock::given(method("PUT"))
        .and(path("/uploader/file"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let result = ctx.client.upload_file("/docs/file.txt", &local).await;
    std::fs::remove_file(&local).unwrap();
    result.unwrap();

    let requests = ctx.server.received_requests().await.unwrap();
    let put = requests.iter().find(|r| r.method.as_str() == "PUT").unwrap();
    assert_eq!(put.body, b"file content");
}

#[tokio::test]
async fn upload_missing_local_file_sends_nothing() {
    let ctx = TestContext::new().await;
    let local = std::env::temp_dir().join(format!("yadisk{}.missing", rand_path().replace('/', "_")));

    let err = ctx.client.upload_file("/x.txt", &local).await.unwrap_err();
    assert!(matches!(err, Error::Network(_)), "{err:?}");
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upload_requires_created_status() {
    let ctx = TestContext::new().await;
    mount_upload_link(&ctx, "/hello.txt", &ctx.href("/uploader/hello")).await;
    Mock::given(method("PUT"))
        .and(path("/uploader/hello"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let err = ctx.client.upload("/hello.txt", "hi").await.unwrap_err();
    match err {
        Error::Validation(ValidationErr::UnexpectedStatus { expected, got }) => {
            assert_eq!(expected, "201 Created");
            assert_eq!(got, 202);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn upload_from_url_starts_operation() {
    let ctx = TestContext::new().await;
    let op_href = ctx.operation_href("d80c269ce4eb16c0207f0a15t4a31415");
    Mock::given(method("POST"))
        .and(path(ctx.endpoint("resources/upload")))
        .and(query_param("path", "/Downloads/archive.zip"))
        .and(query_param("url", "https://example.com/archive.zip?v=2"))
        .respond_with(ResponseTemplate::new(202).set_body_json(link_json(&op_href, "GET")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .upload_from_url("/Downloads/archive.zip", "https://example.com/archive.zip?v=2")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.link().operation(),
        Some("d80c269ce4eb16c0207f0a15t4a31415")
    );
}
