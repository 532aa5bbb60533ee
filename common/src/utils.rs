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

use rand::distr::{Alphanumeric, SampleString};
use serde_json::{Value, json};

/// Random absolute disk path such as `/aB3xYz09`
pub fn rand_path() -> String {
    format!("/{}", Alphanumeric.sample_string(&mut rand::rng(), 8))
}

/// JSON of a file resource
pub fn file_json(path: &str, size: u64) -> Value {
    json!({
        "type": "file",
        "name": name_of(path),
        "path": format!("disk:{path}"),
        "size": size,
        "md5": "d41d8cd98f00b204e9800998ecf8427e",
        "created": "2024-05-01T10:00:00+00:00",
        "modified": "2024-05-02T11:30:00+00:00"
    })
}

/// JSON of a directory resource embedding one page of children
pub fn dir_json(path: &str, items: Vec<Value>, limit: u64, offset: u64) -> Value {
    json!({
        "type": "dir",
        "name": name_of(path),
        "path": format!("disk:{path}"),
        "_embedded": {
            "items": items,
            "limit": limit,
            "offset": offset,
            "path": format!("disk:{path}"),
            "sort": "name"
        }
    })
}

/// `count` file entries below `dir`, numbered from `first`
pub fn files_json(dir: &str, first: usize, count: usize) -> Vec<Value> {
    (first..first + count)
        .map(|i| file_json(&format!("{dir}/file{i:04}.txt"), i as u64))
        .collect()
}

/// JSON of a link object
pub fn link_json(href: &str, method: &str) -> Value {
    json!({ "href": href, "method": method, "templated": false })
}

/// JSON of an API error object
pub fn error_json(error: &str, description: &str) -> Value {
    json!({
        "message": "Error",
        "description": description,
        "error": error
    })
}

fn name_of(path: &str) -> String {
    path.rsplit('/').next().unwrap_or_default().to_string()
}
