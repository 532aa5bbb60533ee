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

//! Client method for CopyResource operation

use crate::disk::builders::{CopyResource, CopyResourceBldr};
use crate::disk::client::DiskClient;

impl DiskClient {
    /// Copies the resource at `from` to `path`
    ///
    /// Overwrites an existing resource at `path` unless `.overwrite(false)`
    /// is set. Copying a directory may start an asynchronous operation.
    pub fn copy<S1: Into<String>, S2: Into<String>>(&self, from: S1, path: S2) -> CopyResourceBldr {
        CopyResource::builder()
            .client(self.clone())
            .from(from)
            .path(path)
    }
}
