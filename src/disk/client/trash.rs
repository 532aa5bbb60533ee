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

//! Client methods for trash operations

use crate::disk::builders::{
    ClearTrash, ClearTrashBldr, DeleteFromTrash, DeleteFromTrashBldr, RestoreFromTrash,
    RestoreFromTrashBldr,
};
use crate::disk::client::DiskClient;

impl DiskClient {
    /// Permanently deletes the trashed resource at `path`
    pub fn trash_delete<S: Into<String>>(&self, path: S) -> DeleteFromTrashBldr {
        DeleteFromTrash::builder().client(self.clone()).path(path)
    }

    /// Empties the trash
    pub fn trash_delete_all(&self) -> ClearTrashBldr {
        ClearTrash::builder().client(self.clone())
    }

    /// Restores the trashed resource at `path` to its original location
    ///
    /// `.name(..)` restores it under a different name and `.overwrite(true)`
    /// replaces an existing resource there.
    pub fn trash_restore<S: Into<String>>(&self, path: S) -> RestoreFromTrashBldr {
        RestoreFromTrash::builder().client(self.clone()).path(path)
    }
}
