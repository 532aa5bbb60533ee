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

//! # Yandex.Disk Rust client (`yadisk`)
//!
//! This crate provides a strongly-typed, async-first interface to the Yandex.Disk REST API.
//!
//! Each supported API operation has a corresponding request builder (e.g., [`disk::builders::ListResources`],
//! [`disk::builders::CopyResource`], [`disk::builders::DeleteFromTrash`]), which allows users to configure
//! request parameters using a fluent builder pattern.
//!
//! All request builders implement the [`disk::types::DiskApi`] trait, which provides the async
//! [`send`](crate::disk::types::DiskApi::send) method to execute the request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use yadisk::disk::DiskClient;
//! use yadisk::disk::types::DiskApi;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), yadisk::disk::error::Error> {
//!     let client = DiskClient::builder().token("my-oauth-token").build()?;
//!
//!     let page = client.list("/Documents").limit(50).build().send().await?;
//!     for item in page.items() {
//!         println!("{} ({:?})", item.path, item.resource_type);
//!     }
//!
//!     // The whole directory, fetched page by page
//!     let all = client.list_all("/Documents").await?;
//!     println!("{} entries", all.items.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//! - Request builder pattern for ergonomic API usage
//! - Full async/await support via [`tokio`]
//! - Strongly-typed responses and links (resource links vs. asynchronous operations)
//! - Transparent error handling via `Result<T, Error>`
//!
//! ## Design
//! - Each API method on the [`disk::DiskClient`] returns a builder struct
//! - Builders implement [`disk::types::ToDiskRequest`] for request conversion and [`disk::types::DiskApi`] for execution
//! - Responses implement [`disk::types::FromDiskResponse`] for consistent deserialization
//! - Multi-request flows (`list_all`, `download`, `upload`, `wait_for_operation`) are plain async methods on the client

#![allow(clippy::result_large_err)]
pub mod disk;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
