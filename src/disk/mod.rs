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

//! Yandex.Disk REST API support
//!
//! # Key Concepts
//!
//! - **Resources**: files and directories addressed by absolute paths such as `/Photos/cat.jpg`
//!   (`disk:/` and `trash:/` prefixes are passed through unchanged)
//! - **Links**: most mutating calls return a link, either to the resulting resource or to a
//!   pending asynchronous operation ([`types::LinkTarget`])
//! - **Operations**: server-side jobs (copying a large directory, emptying the trash) whose
//!   status is queried with [`DiskClient::operation_status`]
//!
//! # Example
//!
//! ```no_run
//! use yadisk::disk::{DiskClient, HasLink};
//! use yadisk::disk::types::DiskApi;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DiskClient::builder().token("my-oauth-token").build()?;
//!
//! let dir = client.mkdir("/Reports").build().send().await?.into_link();
//! println!("created {}", dir.href());
//!
//! client.upload("/Reports/q3.csv", "region,total\nnorth,42\n").await?;
//! let page = client.list("/Reports").build().send().await?;
//! assert_eq!(page.items().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod builders;
pub mod client;
pub mod content;
pub mod creds;
pub mod error;
pub mod error_response;
pub mod header_constants;
pub mod http;
pub mod multimap_ext;
pub mod response;
pub mod response_traits;
pub mod types;
pub mod utils;

pub use client::{ClientConfig, DiskClient, DiskClientBuilder};
pub use response_traits::{HasDiskFields, HasLink, HasOptionalLink};
