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

use crate::disk::types::{DiskRequest, Link};
use crate::{impl_from_disk_optional_link_response, impl_has_disk_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response from ClearTrash operation
#[derive(Clone, Debug)]
pub struct ClearTrashResponse {
    request: DiskRequest,
    headers: HeaderMap,
    body: Bytes,
    link: Option<Link>,
}

impl_has_disk_fields!(ClearTrashResponse);
impl_from_disk_optional_link_response!(ClearTrashResponse);
