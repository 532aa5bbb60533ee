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

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};
use yadisk::disk::HasLink;
use yadisk::disk::types::{DiskApi, LinkTarget};
use yadisk_common::test_context::TestContext;
use yadisk_common::utils::{error_json, link_json, rand_path};

async fn mount_download_link(ctx: &TestContext, disk_path: &str, href: &str) {
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources/download")))
        .and(query_param("path", disk_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(link_json(href, "GET")))
        .expect(1)
        .mount(&ctx.server)
        .await;
}

#[tokio::test]
async fn get_download_link() {
    let ctx = TestContext::new().await;
    let href = ctx.href("/downloader/file?token=abc");
    mount_download_link(&ctx, "/a.txt", &href).await;

    let link = ctx
        .client
        .get_download_link("/a.txt")
        .build()
        .send()
        .await
        .unwrap()
        .into_link();
    assert_eq!(link.href(), href);
    assert_eq!(link.method(), &http::Method::GET);
    assert_eq!(link.target(), &LinkTarget::Resource);
}

#[tokio::test]
async fn download_streams_into_writer() {
    let ctx = TestContext::new().await;
    let content = "line one\nline two\n".repeat(1000);
    mount_download_link(&ctx, "/notes.txt", &ctx.href("/downloader/notes")).await;
    Mock::given(method("GET"))
        .and(path("/downloader/notes"))
        .and(header("Authorization", "OAuth test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(content.clone()))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut buf: Vec<u8> = Vec::new();
    let written = ctx.client.download("/notes.txt", &mut buf).await.unwrap();
    assert_eq!(written, content.len() as u64);
    assert_eq!(buf, content.as_bytes());
}

#[tokio::test]
async fn download_to_file_replaces_target() {
    let ctx = TestContext::new().await;
    mount_download_link(&ctx, "/photo.jpg", &ctx.href("/downloader/photo")).await;
    Mock::given(method("GET"))
        .and(path("/downloader/photo"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xffu8, 0xd8, 0xff, 0xe0]))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let dir = std::env::temp_dir().join(format!("yadisk{}", rand_path().replace('/', "_")));
    let target = dir.join("photo.jpg");

    let written = ctx
        .client
        .download_to_file("/photo.jpg", &target)
        .await
        .unwrap();
    assert_eq!(written, 4);
    assert_eq!(std::fs::read(&target).unwrap(), vec![0xffu8, 0xd8, 0xff, 0xe0]);
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn download_missing_file_fails_before_transfer() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(ctx.endpoint("resources/download")))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(error_json("DiskNotFoundError", "Resource not found.")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut buf: Vec<u8> = Vec::new();
    let err = ctx.client.download("/gone.txt", &mut buf).await.unwrap_err();
    assert_eq!(err.api_error().unwrap().error(), "DiskNotFoundError");
    assert!(buf.is_empty());
}

#[tokio::test]
async fn download_to_file_cleans_up_when_target_cannot_be_replaced() {
    let ctx = TestContext::new().await;
    mount_download_link(&ctx, "/photo.jpg", &ctx.href("/downloader/photo")).await;
    Mock::given(method("GET"))
        .and(path("/downloader/photo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0xffu8, 0xd8, 0xff, 0xe0])
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let dir = std::env::temp_dir().join(format!("yadisk{}", rand_path().replace('/', "_")));
    let target = dir.join("photo.jpg");

    // A directory appears at the target while the body is in flight, so the final rename fails.
    let (res, _) = tokio::join!(ctx.client.download_to_file("/photo.jpg", &target), async {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        std::fs::create_dir_all(target.join("inner")).unwrap();
    });
    assert!(res.is_err(), "{res:?}");

    let names: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("photo.jpg")]);
    assert!(target.is_dir());

    std::fs::remove_dir_all(&dir).unwrap();
}
