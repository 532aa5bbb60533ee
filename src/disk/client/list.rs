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

//! Client method for ListResources operation

use crate::disk::builders::{ListResources, ListResourcesBldr};
use crate::disk::client::DiskClient;

impl DiskClient {
    /// Lists one page of a directory
    ///
    /// Offset, limit and sort key default to `0`, `20` and `name` and can be
    /// changed on the returned builder. See [`ListResources`] for an example.
    pub fn list<S: Into<String>>(&self, path: S) -> ListResourcesBldr {
        ListResources::builder().client(self.clone()).path(path)
    }
}
