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

pub const USER_AGENT: &str = "User-Agent";
pub const AUTHORIZATION: &str = "Authorization";
pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";

pub const APPLICATION_JSON: &str = "application/json";

pub const PATH: &str = "path";
pub const FROM: &str = "from";
pub const OFFSET: &str = "offset";
pub const LIMIT: &str = "limit";
pub const SORT: &str = "sort";
pub const OVERWRITE: &str = "overwrite";
pub const PERMANENTLY: &str = "permanently";
pub const URL: &str = "url";
pub const NAME: &str = "name";
pub const ID: &str = "id";
