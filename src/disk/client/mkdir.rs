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

//! Client method for CreateDir operation

use crate::disk::builders::{CreateDir, CreateDirBldr};
use crate::disk::client::DiskClient;

impl DiskClient {
    /// Creates a directory at `path`
    pub fn mkdir<S: Into<String>>(&self, path: S) -> CreateDirBldr {
        CreateDir::builder().client(self.clone()).path(path)
    }
}
